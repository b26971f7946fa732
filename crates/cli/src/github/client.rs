// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking client for the issues API.

use std::time::Duration;

use gt_core::RepoName;
use reqwest::blocking::{Client, Response};
use reqwest::header;

use super::types::{ErrorBody, RemoteIssue, UpdateLabelsRequest};
use super::{ApiError, ApiResult, IssueSource, LabelWriter};
use crate::config::ApiConfig;

/// Versioned representation negotiated on every request.
pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// Issues API client for one base URL and credential.
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Build a client from the `[api]` config section.
    ///
    /// `token` may be absent: reads of public repositories still work, but
    /// label writes fail with [`ApiError::MissingToken`].
    pub fn new(config: &ApiConfig, token: Option<String>) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(GitHubClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn issues_url(&self, repo: &RepoName) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.base_url,
            repo.owner(),
            repo.name()
        )
    }

    fn issue_url(&self, repo: &RepoName, number: i64) -> String {
        format!("{}/{}", self.issues_url(repo), number)
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("token {t}"))
    }
}

/// Turn a non-success response into [`ApiError::Status`].
fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or_else(|_| {
            if text.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                text
            }
        });

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

impl IssueSource for GitHubClient {
    fn fetch_open_issues(&self, repo: &RepoName) -> ApiResult<Vec<RemoteIssue>> {
        let mut request = self
            .http
            .get(self.issues_url(repo))
            .query(&[("state", "open")])
            .header(header::ACCEPT, ACCEPT_V3);
        if let Some(auth) = self.auth_header() {
            request = request.header(header::AUTHORIZATION, auth);
        }

        let response = check_status(request.send()?)?;
        let text = response.text()?;
        let issues: Vec<RemoteIssue> =
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;

        tracing::debug!(count = issues.len(), "fetched open issues");
        Ok(issues)
    }
}

impl LabelWriter for GitHubClient {
    fn set_labels(&self, repo: &RepoName, number: i64, labels: &[String]) -> ApiResult<()> {
        let auth = self.auth_header().ok_or(ApiError::MissingToken)?;

        let response = self
            .http
            .patch(self.issue_url(repo, number))
            .header(header::ACCEPT, ACCEPT_V3)
            .header(header::AUTHORIZATION, auth)
            .json(&UpdateLabelsRequest { labels })
            .send()?;
        check_status(response)?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
