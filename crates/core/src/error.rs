// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for gt-core operations.

use thiserror::Error;

/// All possible errors that can occur in gt-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid repository name: '{0}'\n  hint: use the form owner/name")]
    InvalidRepo(String),

    #[error("invalid label scope: '{0}'\n  hint: valid scopes are: issue, batch")]
    InvalidScope(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for gt-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
