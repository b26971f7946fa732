// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire types for the issues endpoint.
//!
//! Payloads are decoded into these records at the fetch boundary. A missing
//! required field fails the whole fetch instead of reaching the mirror.

use chrono::{DateTime, Utc};
use gt_core::{Issue, IssueLabel, RepoName};
use serde::{Deserialize, Serialize};

/// An issue as returned by `GET /repos/{repo}/issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteIssue {
    pub id: i64,
    pub number: i64,
    pub user: RemoteUser,
    pub title: String,
    /// Null when the issue was opened without a description.
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub labels: Vec<RemoteLabel>,
}

/// The reporter of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    pub id: i64,
    pub login: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteLabel {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl RemoteIssue {
    /// Label names in the order the API returned them.
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }

    /// Normalize into the mirrored issue row.
    pub fn to_issue(&self, repo: &RepoName) -> Issue {
        Issue {
            repo: repo.to_string(),
            id: self.id,
            actor_id: self.user.id,
            actor_name: self.user.login.clone(),
            actor_avatar: self.user.avatar_url.clone(),
            number: self.number,
            title: self.title.clone(),
            body: self.body.clone(),
            url: self.html_url.clone(),
            created_at: self.created_at.timestamp(),
        }
    }

    /// Normalize into label association rows owned by this issue.
    pub fn to_labels(&self) -> Vec<IssueLabel> {
        self.labels
            .iter()
            .map(|label| IssueLabel {
                issue_id: self.id,
                label_id: label.id,
                label_name: label.name.clone(),
                label_color: label.color.clone(),
            })
            .collect()
    }
}

/// Request body for `PATCH /repos/{repo}/issues/{number}`.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateLabelsRequest<'a> {
    pub labels: &'a [String],
}

/// Error body returned by the API on non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
