// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use gt_core::RepoName;

/// Parse an `owner/name` repository argument.
fn parse_repo(s: &str) -> Result<RepoName, String> {
    s.parse::<RepoName>().map_err(|e| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "ghtriage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mirror open issues locally and flag the ones that need triage")]
#[command(
    long_about = "Mirror open issues locally and flag the ones that need triage.\n\n\
    Each sync fetches the open issues of one repository, adds the triage marker to \
    issues missing a priority or kind label, and stores the batch in a local SQLite mirror."
)]
pub struct Cli {
    /// Run as if ghtriage was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch open issues, mark untriaged ones, and update the local mirror
    #[command(after_help = "\
Examples:
  ghtriage sync --repo acme/widgets             Sync one repository
  ghtriage sync --repo acme/widgets --dry-run   Show what would be marked
  ghtriage sync --repo acme/widgets --strict    Exit 3 if anything failed")]
    Sync {
        /// Repository to sync
        #[arg(long, value_name = "owner/name", value_parser = parse_repo)]
        repo: RepoName,

        /// Classify only; make no upstream or local writes
        #[arg(long)]
        dry_run: bool,

        /// Exit non-zero when the fetch or any label update failed
        #[arg(long)]
        strict: bool,
    },

    /// List mirrored issues, newest first
    List {
        /// Only show issues from this repository
        #[arg(long, value_name = "owner/name", value_parser = parse_repo)]
        repo: Option<RepoName>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Create a .ghtriage directory with the default configuration
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(long)]
        path: Option<String>,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
