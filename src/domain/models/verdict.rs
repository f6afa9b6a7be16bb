//! Reconciliation results and per-definition verdicts.

use serde::{Deserialize, Serialize};

use super::definition::NodeSet;

/// Set-difference comparison between resolved and expected node sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    pub resolved: NodeSet,
    pub expected: NodeSet,
    /// Expected but not resolved.
    pub missing: NodeSet,
    /// Resolved but not expected.
    pub extra: NodeSet,
}

impl ReconciliationResult {
    pub fn is_exact_match(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Outcome of testing one definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail,
    /// A failure the author already expects (reported as TODO).
    ExpectedFail(String),
    /// The definition cannot be tested (reported as SKIP).
    NotTestable(String),
}

impl Outcome {
    /// Short TAP directive name, if the outcome carries one.
    pub const fn directive(&self) -> Option<&'static str> {
        match self {
            Self::ExpectedFail(_) => Some("TODO"),
            Self::NotTestable(_) => Some("SKIP"),
            Self::Pass | Self::Fail => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::ExpectedFail(reason) | Self::NotTestable(reason) => Some(reason),
            Self::Pass | Self::Fail => None,
        }
    }

    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Outcome plus the diagnostic comments printed beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub outcome: Outcome,
    pub comments: Vec<String>,
}

impl Verdict {
    pub const fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            comments: Vec::new(),
        }
    }

    pub fn fail(comment: impl Into<String>) -> Self {
        let mut verdict = Self::new(Outcome::Fail);
        verdict.comment(comment);
        verdict
    }

    pub fn comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    pub fn has_comment_containing(&self, needle: &str) -> bool {
        self.comments.iter().any(|c| c.contains(needle))
    }
}
