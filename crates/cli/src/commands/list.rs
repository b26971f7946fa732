// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use gt_core::{Database, Issue, RepoName};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

use super::open_db;

/// JSON representation of a mirrored issue.
#[derive(Serialize)]
struct ListIssueJson {
    repo: String,
    id: i64,
    number: i64,
    title: String,
    author: String,
    url: String,
    created_at: i64,
    labels: Vec<String>,
}

/// JSON output structure for the list command.
#[derive(Serialize)]
struct ListOutputJson {
    issues: Vec<ListIssueJson>,
}

pub fn run(repo: Option<RepoName>, output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_impl(&db, repo.as_ref(), output, &mut out)
}

pub(crate) fn run_impl(
    db: &Database,
    repo: Option<&RepoName>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let repo = repo.map(|r| r.to_string());
    let issues = db.list_issues(repo.as_deref())?;

    let mut rows = Vec::with_capacity(issues.len());
    for issue in issues {
        let labels = db
            .get_labels(issue.id)?
            .into_iter()
            .map(|l| l.label_name)
            .collect::<Vec<_>>();
        rows.push((issue, labels));
    }

    match output {
        OutputFormat::Text => {
            for (issue, labels) in &rows {
                writeln!(out, "{}", format_issue_line(issue, labels))?;
            }
        }
        OutputFormat::Json => {
            let json = ListOutputJson {
                issues: rows
                    .into_iter()
                    .map(|(issue, labels)| ListIssueJson {
                        repo: issue.repo,
                        id: issue.id,
                        number: issue.number,
                        title: issue.title,
                        author: issue.actor_name,
                        url: issue.url,
                        created_at: issue.created_at,
                        labels,
                    })
                    .collect(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

/// `owner/name#123  Title  [a, b]`
fn format_issue_line(issue: &Issue, labels: &[String]) -> String {
    let mut line = format!("{}#{}  {}", issue.repo, issue.number, issue.title);
    if !labels.is_empty() {
        line.push_str(&format!("  [{}]", labels.join(", ")));
    }
    line
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
