// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase timing for sync runs.
//!
//! Every timed phase is reported as a `debug` event with its duration. When
//! `GHTRIAGE_TIMINGS` is set, a `[timings] phase XXms` line also goes to
//! stderr regardless of the log filter.

use std::time::{Duration, Instant};

/// Wall-clock timer for one named phase.
pub struct PhaseTimer {
    phase: &'static str,
    start: Instant,
}

impl PhaseTimer {
    pub fn start(phase: &'static str) -> Self {
        PhaseTimer {
            phase,
            start: Instant::now(),
        }
    }

    /// Stop the timer and report the elapsed time.
    pub fn finish(self) -> Duration {
        let elapsed = self.start.elapsed();
        tracing::debug!(
            phase = self.phase,
            elapsed_ms = elapsed.as_millis() as u64,
            "phase finished"
        );
        if crate::env::timings() {
            eprintln!("{}", format_timing(self.phase, elapsed));
        }
        elapsed
    }
}

fn format_timing(phase: &str, elapsed: Duration) -> String {
    format!("[timings] {} {}ms", phase, elapsed.as_millis())
}

/// Time a block of code as the named phase.
///
/// Usage:
/// ```rust,ignore
/// let issues = time_phase!("sync::fetch", {
///     source.fetch_open_issues(&repo)
/// });
/// ```
#[macro_export]
macro_rules! time_phase {
    ($phase:expr, $block:expr) => {{
        let __timer = $crate::timings::PhaseTimer::start($phase);
        let __result = $block;
        __timer.finish();
        __result
    }};
}

#[cfg(test)]
#[path = "timings_tests.rs"]
mod tests;
