// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::github::ApiError;

/// All possible errors that can occur in the ghtriage library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("invalid repository name: '{0}'\n  hint: use the form owner/name")]
    InvalidRepo(String),

    #[error("invalid label scope: '{0}'\n  hint: valid scopes are: issue, batch")]
    InvalidScope(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("api error: {0}")]
    Api(#[from] ApiError),

    #[error("sync of {repo} incomplete: {reason}")]
    RunDegraded { repo: String, reason: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Degraded runs under `--strict` exit with 3; everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::RunDegraded { .. } => 3,
            _ => 1,
        }
    }
}

/// A specialized Result type for ghtriage operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<gt_core::Error> for Error {
    fn from(e: gt_core::Error) -> Self {
        match e {
            gt_core::Error::InvalidRepo(s) => Error::InvalidRepo(s),
            gt_core::Error::InvalidScope(s) => Error::InvalidScope(s),
            gt_core::Error::Database(e) => Error::Database(e),
            gt_core::Error::Io(e) => Error::Io(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
