// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use ghtriage::Cli;

fn main() {
    let cli = Cli::parse();
    setup_logging();

    if let Some(dir) = &cli.directory {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("error: cannot change to directory '{}': {}", dir, e);
            std::process::exit(1);
        }
    }

    if let Err(e) = ghtriage::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr so stdout stays reserved for command output.
fn setup_logging() {
    use ghtriage::env::vars::RUST_LOG;
    use std::io::IsTerminal;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
