// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Triage classification.
//!
//! An issue is triage-ready when its labels cover both the priority and the
//! kind namespaces. Issues that are not ready get the triage marker added
//! upstream, unless they already carry it. Namespaces are matched by
//! substring containment, so `area/priority/x` counts as a priority label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default substring identifying priority labels.
pub const PRIORITY_PREFIX: &str = "priority/";
/// Default substring identifying kind labels.
pub const KIND_PREFIX: &str = "kind/";
/// Default marker label added to issues that need triage.
pub const TRIAGE_MARKER: &str = "need/triage";

/// The label namespaces that drive classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriagePolicy {
    pub priority_prefix: String,
    pub kind_prefix: String,
    pub marker: String,
}

impl Default for TriagePolicy {
    fn default() -> Self {
        TriagePolicy {
            priority_prefix: PRIORITY_PREFIX.to_string(),
            kind_prefix: KIND_PREFIX.to_string(),
            marker: TRIAGE_MARKER.to_string(),
        }
    }
}

/// Which namespaces a label set covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub has_priority: bool,
    pub has_kind: bool,
    pub has_marker: bool,
}

impl Assessment {
    /// True if either the priority or the kind axis is missing.
    pub fn needs_triage(&self) -> bool {
        !(self.has_priority && self.has_kind)
    }

    /// True if the marker must be written upstream.
    pub fn should_mutate(&self) -> bool {
        self.needs_triage() && !self.has_marker
    }
}

/// Outcome of classifying one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Both axes are present.
    Ready,
    /// An axis is missing but the marker is already present.
    Marked,
    /// The full replacement label list to write upstream.
    Mutate(Vec<String>),
}

impl TriagePolicy {
    /// Check a label-name set against the policy namespaces.
    pub fn assess<S: AsRef<str>>(&self, labels: &[S]) -> Assessment {
        let any = |needle: &str| labels.iter().any(|l| l.as_ref().contains(needle));
        Assessment {
            has_priority: any(&self.priority_prefix),
            has_kind: any(&self.kind_prefix),
            has_marker: any(&self.marker),
        }
    }

    /// Classify a label-name set.
    ///
    /// When a mutation is required, the replacement list is `labels` in the
    /// given order with the marker appended.
    pub fn decide<S: AsRef<str>>(&self, labels: &[S]) -> Decision {
        let assessment = self.assess(labels);
        if assessment.should_mutate() {
            let mut next: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
            next.push(self.marker.clone());
            Decision::Mutate(next)
        } else if assessment.needs_triage() {
            Decision::Marked
        } else {
            Decision::Ready
        }
    }
}

/// Which labels an issue is classified against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LabelScope {
    /// Only the issue's own labels.
    #[default]
    Issue,
    /// Every label name seen so far in the batch, including earlier issues.
    Batch,
}

impl LabelScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelScope::Issue => "issue",
            LabelScope::Batch => "batch",
        }
    }
}

impl fmt::Display for LabelScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LabelScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "issue" => Ok(LabelScope::Issue),
            "batch" => Ok(LabelScope::Batch),
            _ => Err(Error::InvalidScope(s.to_string())),
        }
    }
}

impl TryFrom<String> for LabelScope {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LabelScope> for String {
    fn from(value: LabelScope) -> Self {
        value.as_str().to_string()
    }
}

/// Stateful classifier for one run.
///
/// Issues must be fed in fetch order. With [`LabelScope::Batch`] the label
/// names of earlier issues stay in play for later ones; the marker appended
/// for a mutation is never carried forward.
#[derive(Debug, Clone)]
pub struct Classifier {
    policy: TriagePolicy,
    scope: LabelScope,
    seen: Vec<String>,
}

impl Classifier {
    pub fn new(policy: TriagePolicy, scope: LabelScope) -> Self {
        Classifier {
            policy,
            scope,
            seen: Vec::new(),
        }
    }

    /// Classify the next issue given its own label names.
    pub fn classify<I, S>(&mut self, labels: I) -> Decision
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let own: Vec<String> = labels.into_iter().map(Into::into).collect();
        match self.scope {
            LabelScope::Issue => self.policy.decide(&own),
            LabelScope::Batch => {
                self.seen.extend(own);
                self.policy.decide(&self.seen)
            }
        }
    }
}

#[cfg(test)]
#[path = "triage_tests.rs"]
mod tests;
