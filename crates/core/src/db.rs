// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed local mirror.
//!
//! The [`Database`] struct stores mirrored issues and their label
//! associations, and reconciles them against each fetched batch.

use rusqlite::{params, Connection, Row};
use std::path::Path;

use crate::error::Result;
use crate::issue::{Issue, IssueBatch, IssueLabel};

/// SQL schema for the issue mirror.
pub const SCHEMA: &str = r#"
-- One row per upstream issue, scoped to a repository
CREATE TABLE IF NOT EXISTS issues (
    repo TEXT NOT NULL,
    id INTEGER NOT NULL,
    actor_id INTEGER NOT NULL,
    actor_name TEXT NOT NULL,
    actor_avatar TEXT NOT NULL,
    ref INTEGER NOT NULL,
    title TEXT NOT NULL,
    body TEXT,
    url TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    PRIMARY KEY (repo, id)
);

-- Label associations, replaced wholesale per issue on every sync
CREATE TABLE IF NOT EXISTS issue_labels (
    issue_id INTEGER NOT NULL,
    label_id INTEGER NOT NULL,
    label_name TEXT NOT NULL,
    label_color TEXT NOT NULL,
    PRIMARY KEY (issue_id, label_id)
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_issues_created ON issues(repo, created_at DESC);
CREATE INDEX IF NOT EXISTS idx_issue_labels_name ON issue_labels(label_name);
"#;

const ISSUE_COLUMNS: &str =
    "repo, id, actor_id, actor_name, actor_avatar, ref, title, body, url, created_at";

/// Run schema creation on a database connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

fn issue_from_row(row: &Row<'_>) -> std::result::Result<Issue, rusqlite::Error> {
    Ok(Issue {
        repo: row.get(0)?,
        id: row.get(1)?,
        actor_id: row.get(2)?,
        actor_name: row.get(3)?,
        actor_avatar: row.get(4)?,
        number: row.get(5)?,
        title: row.get(6)?,
        body: row.get(7)?,
        url: row.get(8)?,
        created_at: row.get(9)?,
    })
}

/// Insert an issue, overwriting every attribute if `(repo, id)` exists.
fn upsert_issue(conn: &Connection, issue: &Issue) -> Result<()> {
    conn.execute(
        "INSERT INTO issues (repo, id, actor_id, actor_name, actor_avatar, ref,
         title, body, url, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
         ON CONFLICT (repo, id) DO UPDATE SET
             actor_id = excluded.actor_id,
             actor_name = excluded.actor_name,
             actor_avatar = excluded.actor_avatar,
             ref = excluded.ref,
             title = excluded.title,
             body = excluded.body,
             url = excluded.url,
             created_at = excluded.created_at",
        params![
            issue.repo,
            issue.id,
            issue.actor_id,
            issue.actor_name,
            issue.actor_avatar,
            issue.number,
            issue.title,
            issue.body,
            issue.url,
            issue.created_at,
        ],
    )?;
    Ok(())
}

/// Counts of rows touched by a reconcile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub issues_upserted: usize,
    pub labels_deleted: usize,
    pub labels_inserted: usize,
}

/// SQLite database connection with mirror operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating the schema if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Make the mirror reflect `batch`.
    ///
    /// Issues are upserted by `(repo, id)`. Label rows for every issue in the
    /// batch are deleted and re-inserted from the batch; rows for issues
    /// outside the batch are untouched. Everything runs in one transaction.
    /// An empty batch performs no writes.
    pub fn reconcile(&mut self, batch: &IssueBatch) -> Result<ReconcileStats> {
        let mut stats = ReconcileStats::default();
        if batch.is_empty() {
            return Ok(stats);
        }

        let tx = self.conn.transaction()?;

        for issue in &batch.issues {
            upsert_issue(&tx, issue)?;
            stats.issues_upserted += 1;
        }

        {
            let mut delete = tx.prepare("DELETE FROM issue_labels WHERE issue_id = ?1")?;
            for issue_id in batch.reconciled_ids() {
                stats.labels_deleted += delete.execute(params![issue_id])?;
            }

            let mut insert = tx.prepare(
                "INSERT OR REPLACE INTO issue_labels (issue_id, label_id, label_name, label_color)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for label in &batch.labels {
                insert.execute(params![
                    label.issue_id,
                    label.label_id,
                    label.label_name,
                    label.label_color,
                ])?;
                stats.labels_inserted += 1;
            }
        }

        tx.commit()?;
        Ok(stats)
    }

    /// List mirrored issues, newest first, optionally for one repository.
    pub fn list_issues(&self, repo: Option<&str>) -> Result<Vec<Issue>> {
        let mut sql = format!("SELECT {ISSUE_COLUMNS} FROM issues");
        let mut params_vec: Vec<&dyn rusqlite::ToSql> = Vec::new();

        if let Some(ref r) = repo {
            sql.push_str(" WHERE repo = ?1");
            params_vec.push(r);
        }

        sql.push_str(" ORDER BY created_at DESC, id DESC");

        let mut stmt = self.conn.prepare(&sql)?;
        let issues = stmt
            .query_map(params_vec.as_slice(), issue_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(issues)
    }

    /// Get all label associations for an issue, ordered by name.
    pub fn get_labels(&self, issue_id: i64) -> Result<Vec<IssueLabel>> {
        let mut stmt = self.conn.prepare(
            "SELECT issue_id, label_id, label_name, label_color
             FROM issue_labels WHERE issue_id = ?1 ORDER BY label_name, label_id",
        )?;

        let labels = stmt
            .query_map(params![issue_id], |row| {
                Ok(IssueLabel {
                    issue_id: row.get(0)?,
                    label_id: row.get(1)?,
                    label_name: row.get(2)?,
                    label_color: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(labels)
    }

    /// Count all mirrored issues.
    pub fn count_issues(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM issues", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
