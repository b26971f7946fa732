// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Upstream issue tracker access.
//!
//! The sync runner talks to the tracker through two narrow traits so that
//! tests can substitute in-memory fakes:
//!
//! - [`IssueSource`] reads the open issues of a repository
//! - [`LabelWriter`] replaces the label set of one issue
//!
//! [`GitHubClient`] implements both against the REST API.

mod client;
mod types;

pub use client::{GitHubClient, ACCEPT_V3};
pub use types::{RemoteIssue, RemoteLabel, RemoteUser};

/// Error type for upstream API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{status} - {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A write was attempted without a credential.
    #[error("missing credential\n  hint: set GITHUB_TOKEN")]
    MissingToken,
}

/// Result type for upstream API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Reads the current open issues of a repository.
pub trait IssueSource {
    /// Fetch the open issues in the order the API returns them.
    fn fetch_open_issues(&self, repo: &gt_core::RepoName) -> ApiResult<Vec<RemoteIssue>>;
}

/// Replaces the labels of a single upstream issue.
pub trait LabelWriter {
    /// Set the issue's labels to exactly `labels`.
    fn set_labels(
        &self,
        repo: &gt_core::RepoName,
        number: i64,
        labels: &[String],
    ) -> ApiResult<()>;
}
