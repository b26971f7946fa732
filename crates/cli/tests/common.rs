// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// An address nothing listens on.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// The binary with a clean environment: no credential, no API override.
pub fn ghtriage() -> Command {
    let mut cmd = cargo_bin_cmd!("ghtriage");
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("GHTRIAGE_API_URL")
        .env_remove("GHTRIAGE_TIMINGS")
        .env("RUST_LOG", "info");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    ghtriage()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Run `list -o json` and parse the result.
pub fn list_json(temp: &TempDir) -> serde_json::Value {
    let output = ghtriage()
        .args(["list", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}
