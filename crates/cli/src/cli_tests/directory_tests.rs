// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    separate = { &["ghtriage", "-C", "/tmp", "list"] },
    equals = { &["ghtriage", "-C=/tmp", "list"] },
    no_space = { &["ghtriage", "-C/tmp", "list"] },
    long = { &["ghtriage", "--directory", "/tmp", "list"] },
    long_equals = { &["ghtriage", "--directory=/tmp", "list"] },
    after_subcommand = { &["ghtriage", "list", "-C", "/tmp"] },
)]
fn parse_directory_flag(args: &[&str]) {
    let cli = Cli::try_parse_from(args).unwrap();
    assert_eq!(cli.directory, Some("/tmp".to_string()));
}

#[test]
fn parse_no_directory_flag() {
    let cli = Cli::try_parse_from(["ghtriage", "list"]).unwrap();
    assert_eq!(cli.directory, None);
}
