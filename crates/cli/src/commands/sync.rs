// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gt_core::{Database, RepoName};

use crate::config::TriageConfig;
use crate::env;
use crate::error::{Error, Result};
use crate::github::{GitHubClient, IssueSource, LabelWriter};
use crate::sync::{RunReport, Runner, SyncOptions};

use super::open_db;

pub fn run(repo: RepoName, dry_run: bool, strict: bool) -> Result<()> {
    let (mut db, workspace) = open_db()?;
    let config = workspace.config.with_api_url(env::api_url());
    let client = GitHubClient::new(&config.api, env::github_token())?;

    let report = run_impl(&client, &client, &mut db, &repo, &config.triage, dry_run)?;
    println!("{}", report);

    check_strict(&report, strict)
}

pub(crate) fn run_impl<S: IssueSource, W: LabelWriter>(
    source: &S,
    writer: &W,
    db: &mut Database,
    repo: &RepoName,
    triage: &TriageConfig,
    dry_run: bool,
) -> Result<RunReport> {
    let options = SyncOptions {
        policy: triage.policy(),
        scope: triage.scope,
        dry_run,
    };
    Runner::new(source, writer, options).run(db, repo)
}

/// Turn a degraded run into an error when `--strict` is set.
pub(crate) fn check_strict(report: &RunReport, strict: bool) -> Result<()> {
    match report.degraded_reason() {
        Some(reason) if strict => Err(Error::RunDegraded {
            repo: report.repo.clone(),
            reason,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
