// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run orchestration.
//!
//! One run fetches the open issues of a repository, marks the ones missing a
//! priority or kind label, and mirrors the fetched batch into the local
//! database. The run is strictly sequential: issues are handled one at a
//! time in fetch order.

mod runner;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use runner::{RunOutcome, RunReport, Runner, SyncOptions};
