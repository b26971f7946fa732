// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod init;
pub mod list;
pub mod sync;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use gt_core::Database;

use crate::config::Workspace;
use crate::error::Result;

/// Helper to open the database from the current context.
///
/// Works without a `.ghtriage/` directory: the default config applies and the
/// database is created at `./.ghtriage/mirror.db`.
pub fn open_db() -> Result<(Database, Workspace)> {
    let workspace = Workspace::current()?;
    let db_path = workspace.db_path();
    let db = crate::time_phase!("db::open", { Database::open(&db_path)? });
    Ok((db, workspace))
}
