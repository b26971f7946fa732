// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use gt_core::Database;

use crate::config::{get_db_path, init_work_dir, Config};
use crate::error::Result;

pub fn run(path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    let work_dir = init_work_dir(&target_path)?;

    // Create the schema up front so `list` works before the first sync.
    let config = Config::load(&work_dir)?;
    Database::open(&get_db_path(&work_dir, &config))?;

    println!("Initialized ghtriage at {}", work_dir.display());
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
