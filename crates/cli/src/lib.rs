// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ghtriage - mirror open issues locally and flag the ones that need triage.
//!
//! This crate provides the `ghtriage` CLI: configuration, the issues API
//! client, and the sync runner that ties them to the [`gt_core`] mirror.
//!
//! # Main Components
//!
//! - [`github`] - Issues API client behind the [`IssueSource`](github::IssueSource)
//!   and [`LabelWriter`](github::LabelWriter) traits
//! - [`sync`] - The [`Runner`](sync::Runner) that sequences one run
//! - [`Config`] - Project configuration from `.ghtriage/config.toml`
//! - [`Error`] - Error types for all operations
//!
//! # Running a sync from code
//!
//! ```rust,ignore
//! use ghtriage::github::GitHubClient;
//! use ghtriage::sync::{Runner, SyncOptions};
//! use ghtriage::Config;
//! use gt_core::Database;
//!
//! let config = Config::default();
//! let client = GitHubClient::new(&config.api, std::env::var("GITHUB_TOKEN").ok())?;
//! let mut db = Database::open(Path::new("mirror.db"))?;
//! let report = Runner::new(&client, &client, SyncOptions::default())
//!     .run(&mut db, &"acme/widgets".parse()?)?;
//! println!("{report}");
//! ```

mod cli;
mod commands;
pub mod env;
pub mod timings;

pub mod config;
pub mod error;
pub mod github;
pub mod sync;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_work_dir_from, get_db_path, init_work_dir, Config, Workspace};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Sync {
            repo,
            dry_run,
            strict,
        } => commands::sync::run(repo, dry_run, strict),
        Command::List { repo, output } => commands::list::run(repo, output),
        Command::Init { path } => commands::init::run(path),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
