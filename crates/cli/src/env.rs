// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `GHTRIAGE_TIMINGS` is set (any value).
pub fn timings() -> bool {
    std::env::var(vars::GHTRIAGE_TIMINGS).is_ok()
}

/// Returns the API credential from `GITHUB_TOKEN`, ignoring blank values.
pub fn github_token() -> Option<String> {
    non_blank(std::env::var(vars::GITHUB_TOKEN).ok())
}

/// Returns the API base URL override from `GHTRIAGE_API_URL`.
pub fn api_url() -> Option<String> {
    non_blank(std::env::var(vars::GHTRIAGE_API_URL).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
