// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gt-core: Shared library for the ghtriage issue mirror
//!
//! This crate provides the mirrored issue records, the triage classifier, and
//! the SQLite-backed local mirror used by the ghtriage CLI.

pub mod db;
pub mod error;
pub mod issue;
pub mod triage;

pub use db::{Database, ReconcileStats};
pub use error::{Error, Result};
pub use issue::{Issue, IssueBatch, IssueLabel, RepoName};
pub use triage::{Classifier, Decision, LabelScope, TriagePolicy};
