// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A single sync run for one repository.

use std::fmt;

use gt_core::{
    Classifier, Database, Decision, IssueBatch, LabelScope, ReconcileStats, RepoName,
    TriagePolicy,
};
use tracing::{info, info_span, warn};

use crate::error::Result;
use crate::github::{IssueSource, LabelWriter};

/// Settings for one run.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    pub policy: TriagePolicy,
    pub scope: LabelScope,
    /// Classify and report, but write nothing upstream or locally.
    pub dry_run: bool,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The fetch failed; nothing downstream ran.
    FetchFailed { reason: String },
    /// Every fetched issue was classified and the batch was reconciled.
    Completed,
}

/// Counters and outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub repo: String,
    pub outcome: RunOutcome,
    pub fetched: usize,
    /// Issues whose labels needed a marker write.
    pub mutations: usize,
    pub mutation_failures: usize,
    pub reconciled: ReconcileStats,
    pub dry_run: bool,
}

impl RunReport {
    fn new(repo: &RepoName, dry_run: bool) -> Self {
        RunReport {
            repo: repo.to_string(),
            outcome: RunOutcome::Completed,
            fetched: 0,
            mutations: 0,
            mutation_failures: 0,
            reconciled: ReconcileStats::default(),
            dry_run,
        }
    }

    /// True when the fetch failed or any upstream write failed.
    pub fn is_degraded(&self) -> bool {
        self.degraded_reason().is_some()
    }

    pub fn degraded_reason(&self) -> Option<String> {
        match &self.outcome {
            RunOutcome::FetchFailed { reason } => Some(format!("fetch failed: {reason}")),
            RunOutcome::Completed if self.mutation_failures > 0 => Some(format!(
                "{} of {} label updates failed",
                self.mutation_failures, self.mutations
            )),
            RunOutcome::Completed => None,
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let RunOutcome::FetchFailed { reason } = &self.outcome {
            return write!(f, "{}: fetch failed ({}), nothing synced", self.repo, reason);
        }
        if self.dry_run {
            return write!(
                f,
                "{}: {} open issues, {} would be marked (dry run)",
                self.repo, self.fetched, self.mutations
            );
        }
        write!(
            f,
            "{}: {} open issues, {} marked, {} failed, {} labels stored",
            self.repo,
            self.fetched,
            self.mutations - self.mutation_failures,
            self.mutation_failures,
            self.reconciled.labels_inserted
        )
    }
}

/// Sequences fetch, classification, label writes and reconciliation.
pub struct Runner<'a, S, W> {
    source: &'a S,
    writer: &'a W,
    options: SyncOptions,
}

impl<'a, S: IssueSource, W: LabelWriter> Runner<'a, S, W> {
    pub fn new(source: &'a S, writer: &'a W, options: SyncOptions) -> Self {
        Runner {
            source,
            writer,
            options,
        }
    }

    /// Run once against `repo`.
    ///
    /// A failed fetch ends the run with [`RunOutcome::FetchFailed`] and leaves
    /// the store untouched. A failed label write is counted and the run moves
    /// on to the next issue. Store errors are returned.
    pub fn run(&self, db: &mut Database, repo: &RepoName) -> Result<RunReport> {
        let span = info_span!("sync", repo = %repo);
        let _guard = span.enter();

        let mut report = RunReport::new(repo, self.options.dry_run);

        let remote = match crate::time_phase!("sync::fetch", self.source.fetch_open_issues(repo))
        {
            Ok(issues) => issues,
            Err(e) => {
                warn!(error = %e, "failed to fetch open issues");
                report.outcome = RunOutcome::FetchFailed {
                    reason: e.to_string(),
                };
                return Ok(report);
            }
        };
        report.fetched = remote.len();

        if remote.is_empty() {
            info!("no open issues");
            return Ok(report);
        }

        let mut classifier = Classifier::new(self.options.policy.clone(), self.options.scope);
        let mut batch = IssueBatch::new();

        for issue in &remote {
            if let Decision::Mutate(labels) = classifier.classify(issue.label_names()) {
                report.mutations += 1;
                if self.options.dry_run {
                    info!(
                        issue = issue.number,
                        ?labels,
                        "would set issue #{} labels",
                        issue.number
                    );
                } else {
                    match self.writer.set_labels(repo, issue.number, &labels) {
                        Ok(()) => info!(
                            issue = issue.number,
                            ?labels,
                            "set issue #{} labels",
                            issue.number
                        ),
                        Err(e) => {
                            report.mutation_failures += 1;
                            warn!(issue = issue.number, error = %e, "failed to set labels");
                        }
                    }
                }
            }
            // The mirror records the labels as fetched, whatever the write did.
            batch.push(issue.to_issue(repo), issue.to_labels());
        }

        if self.options.dry_run {
            info!(
                fetched = report.fetched,
                mutations = report.mutations,
                "dry run complete"
            );
            return Ok(report);
        }

        info!(issues = batch.issues.len(), "saving issues");
        info!(labels = batch.labels.len(), "saving issue labels");
        report.reconciled = crate::time_phase!("sync::reconcile", db.reconcile(&batch)?);

        info!(
            fetched = report.fetched,
            mutations = report.mutations,
            mutation_failures = report.mutation_failures,
            "sync complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
