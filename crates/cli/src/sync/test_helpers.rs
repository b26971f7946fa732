// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory tracker for sync tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use gt_core::RepoName;

use crate::github::{
    ApiError, ApiResult, IssueSource, LabelWriter, RemoteIssue, RemoteLabel, RemoteUser,
};

/// Build a remote issue with the given labels.
///
/// `id` is the API id; `number` is derived as `id - 1000`.
pub fn remote_issue(id: i64, labels: &[&str]) -> RemoteIssue {
    RemoteIssue {
        id,
        number: id - 1000,
        user: RemoteUser {
            id: 1,
            login: "reporter".to_string(),
            avatar_url: "https://example.com/avatar.png".to_string(),
        },
        title: format!("Issue {id}"),
        body: None,
        html_url: format!("https://github.com/acme/widgets/issues/{}", id - 1000),
        created_at: Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap(),
        labels: labels
            .iter()
            .map(|name| RemoteLabel {
                id: label_id(name),
                name: name.to_string(),
                color: "ededed".to_string(),
            })
            .collect(),
    }
}

// Stable per name so a relabel keeps existing label ids.
fn label_id(name: &str) -> i64 {
    name.bytes().fold(7i64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as i64)) & 0xffff_ffff
}

/// A fake upstream that serves issues and applies label writes to them.
///
/// Writes to issue numbers in `failing` are rejected with a 403.
#[derive(Default)]
pub struct FakeTracker {
    issues: Mutex<Vec<RemoteIssue>>,
    fetch_error: Option<String>,
    failing: HashSet<i64>,
    fetches: Mutex<usize>,
    writes: Mutex<Vec<(i64, Vec<String>)>>,
}

impl FakeTracker {
    pub fn new(issues: Vec<RemoteIssue>) -> Self {
        FakeTracker {
            issues: Mutex::new(issues),
            ..Default::default()
        }
    }

    /// A tracker whose fetch always fails.
    pub fn unreachable(reason: &str) -> Self {
        FakeTracker {
            fetch_error: Some(reason.to_string()),
            ..Default::default()
        }
    }

    pub fn failing_writes_for(mut self, number: i64) -> Self {
        self.failing.insert(number);
        self
    }

    pub fn fetches(&self) -> usize {
        *self.fetches.lock().unwrap()
    }

    /// Every attempted write, in order, including rejected ones.
    pub fn writes(&self) -> Vec<(i64, Vec<String>)> {
        self.writes.lock().unwrap().clone()
    }

    /// Current upstream label names of issue `number`.
    pub fn labels_of(&self, number: i64) -> Vec<String> {
        self.issues
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.number == number)
            .map(|i| i.label_names())
            .unwrap_or_default()
    }
}

impl IssueSource for FakeTracker {
    fn fetch_open_issues(&self, _repo: &RepoName) -> ApiResult<Vec<RemoteIssue>> {
        *self.fetches.lock().unwrap() += 1;
        if let Some(reason) = &self.fetch_error {
            return Err(ApiError::Status {
                status: 503,
                message: reason.clone(),
            });
        }
        Ok(self.issues.lock().unwrap().clone())
    }
}

impl LabelWriter for FakeTracker {
    fn set_labels(&self, _repo: &RepoName, number: i64, labels: &[String]) -> ApiResult<()> {
        self.writes.lock().unwrap().push((number, labels.to_vec()));
        if self.failing.contains(&number) {
            return Err(ApiError::Status {
                status: 403,
                message: "Resource not accessible".to_string(),
            });
        }

        let mut issues = self.issues.lock().unwrap();
        let issue = issues
            .iter_mut()
            .find(|i| i.number == number)
            .ok_or(ApiError::Status {
                status: 404,
                message: "Not Found".to_string(),
            })?;
        issue.labels = labels
            .iter()
            .map(|name| RemoteLabel {
                id: label_id(name),
                name: name.clone(),
                color: "ededed".to_string(),
            })
            .collect();
        Ok(())
    }
}
