// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mirrored issue types.
//!
//! This module contains the normalized records written to the local mirror:
//! [`Issue`] rows keyed by `(repo, id)`, [`IssueLabel`] association rows, and
//! the [`IssueBatch`] produced by a single sync run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoName {
    owner: String,
    name: String,
}

impl RepoName {
    /// Returns the owning user or organization.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name without the owner.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn valid_segment(s: &str) -> bool {
    !s.is_empty()
        && s != "."
        && s != ".."
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl FromStr for RepoName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.split_once('/') {
            Some((owner, name)) if valid_segment(owner) && valid_segment(name) => Ok(RepoName {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(Error::InvalidRepo(s.to_string())),
        }
    }
}

impl TryFrom<String> for RepoName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<RepoName> for String {
    fn from(value: RepoName) -> Self {
        value.to_string()
    }
}

/// One upstream issue as stored in the mirror.
///
/// Identity is `(repo, id)`. `number` is the human-facing reference used to
/// address the issue through the API and is stored in the `ref` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub repo: String,
    pub id: i64,
    pub actor_id: i64,
    pub actor_name: String,
    pub actor_avatar: String,
    #[serde(rename = "ref")]
    pub number: i64,
    pub title: String,
    pub body: Option<String>,
    pub url: String,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
}

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLabel {
    pub issue_id: i64,
    pub label_id: i64,
    pub label_name: String,
    pub label_color: String,
}

/// Normalized records gathered from one fetch, in fetch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueBatch {
    pub issues: Vec<Issue>,
    pub labels: Vec<IssueLabel>,
}

impl IssueBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an issue together with the labels observed for it.
    pub fn push(&mut self, issue: Issue, labels: impl IntoIterator<Item = IssueLabel>) {
        self.issues.push(issue);
        self.labels.extend(labels);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue ids whose label rows are replaced when this batch is reconciled.
    ///
    /// Covers every issue in the batch, including issues that currently carry
    /// no labels, so that labels removed upstream do not linger locally.
    pub fn reconciled_ids(&self) -> BTreeSet<i64> {
        self.issues
            .iter()
            .map(|issue| issue.id)
            .chain(self.labels.iter().map(|label| label.issue_id))
            .collect()
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
