//! Per-definition verdict classification.
//!
//! Rules are evaluated in priority order and the first match wins:
//!
//! 1. Nothing resolved: `Fail` ("No nodes matched."). Terminal, status and
//!    specifier evidence is not consulted for the outcome.
//! 2. Nothing expected: `NotTestable`, there is no declared expectation to
//!    test against.
//! 3. Exact match: `Pass`, with an advisory when the status history says the
//!    definition was not expected to resolve yet.
//! 4. Mismatch: `Fail`, downgraded to `ExpectedFail` when the definition is
//!    not expected to resolve, and again (taking precedence) when specifiers
//!    are unmatched.

use std::collections::BTreeSet;

use crate::domain::models::{format_statuses, Outcome, ReconciliationResult, Specifier, Verdict};
use crate::services::node_set_reconciler::NodeDisplay;
use crate::services::status_history::ExpectedResolution;

pub const NO_NODES_MATCHED: &str = "No nodes matched.";
pub const NO_EXPECTED_RESOLUTION: &str =
    "Phyloreference has no expected resolution, and so cannot be tested.";
pub const SPECIFIERS_UNMATCHED: &str =
    "Phyloreference could not be tested, as one or more specifiers did not match.";

/// Facts gathered for one definition.
#[derive(Debug, Clone)]
pub struct ClassificationInput<'a> {
    pub reconciliation: &'a ReconciliationResult,
    pub expectation: &'a ExpectedResolution,
    pub unmatched_specifiers: &'a BTreeSet<Specifier>,
}

/// Pure verdict classifier. Total: every input yields a verdict.
#[derive(Debug, Clone, Default)]
pub struct VerdictClassifier {
    display: NodeDisplay,
}

impl VerdictClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier whose comments render node ids through `display`.
    pub const fn with_display(display: NodeDisplay) -> Self {
        Self { display }
    }

    pub fn classify(&self, input: &ClassificationInput<'_>) -> Verdict {
        let recon = input.reconciliation;
        let expectation = input.expectation;

        let mut verdict = if recon.resolved.is_empty() {
            Verdict::fail(NO_NODES_MATCHED)
        } else if recon.expected.is_empty() {
            Verdict::new(Outcome::NotTestable(NO_EXPECTED_RESOLUTION.to_string()))
        } else if recon.is_exact_match() {
            Verdict::new(Outcome::Pass)
        } else {
            Self::mitigate(expectation, input.unmatched_specifiers)
        };

        verdict.comment(format!("Expected nodes: {}", self.display.set(&recon.expected)));
        verdict.comment(format!("Resolved nodes: {}", self.display.set(&recon.resolved)));
        verdict.comment(format!(
            "Some nodes were expected but were not resolved: {}",
            self.display.set(&recon.missing)
        ));
        verdict.comment(format!(
            "Some nodes were resolved but were not expected: {}",
            self.display.set(&recon.extra)
        ));

        for specifier in input.unmatched_specifiers {
            verdict.comment(format!(
                "Specifier '{}' is marked as unmatched.",
                specifier.display_name()
            ));
        }

        match verdict.outcome {
            Outcome::Pass if !expectation.expected_to_resolve => {
                verdict.comment(format!(
                    "Phyloreference resolved correctly but was not expected to resolve; \
                     status should be changed to 'pso:submitted' from {}",
                    format_statuses(&expectation.active_statuses)
                ));
            }
            Outcome::ExpectedFail(_)
                if !input.unmatched_specifiers.is_empty() && !expectation.has_draft_status() =>
            {
                verdict.comment(format!(
                    "Since specifiers remain unmatched, this phyloreference should have a status \
                     of 'pso:draft' but instead its status is {}",
                    format_statuses(&expectation.active_statuses)
                ));
            }
            _ => {}
        }

        verdict
    }

    fn mitigate(expectation: &ExpectedResolution, unmatched: &BTreeSet<Specifier>) -> Verdict {
        let mut outcome = Outcome::Fail;
        if !expectation.expected_to_resolve {
            outcome = Outcome::ExpectedFail(format!(
                "Phyloreference is not expected to resolve given status {}",
                format_statuses(&expectation.active_statuses)
            ));
        }
        if !unmatched.is_empty() {
            outcome = Outcome::ExpectedFail(SPECIFIERS_UNMATCHED.to_string());
        }
        Verdict::new(outcome)
    }
}
