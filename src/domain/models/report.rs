use serde::{Deserialize, Serialize};

use super::definition::Definition;
use super::verdict::{Outcome, Verdict};

/// Exit status used when no definition passed, whatever else happened.
pub const NO_SUCCESS_EXIT_STATUS: i32 = -1;

/// Aggregate verdict counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCounts {
    pub success: usize,
    pub failure: usize,
    /// Expected failures, reported with a TODO directive.
    pub todo: usize,
    /// Untestable definitions, reported with a SKIP directive.
    pub skip: usize,
}

impl ReportCounts {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Pass => self.success += 1,
            Outcome::Fail => self.failure += 1,
            Outcome::ExpectedFail(_) => self.todo += 1,
            Outcome::NotTestable(_) => self.skip += 1,
        }
    }

    pub const fn total(&self) -> usize {
        self.success + self.failure + self.todo + self.skip
    }

    /// The sentinel when nothing passed; otherwise the number of hard failures.
    pub fn exit_status(&self) -> i32 {
        if self.success == 0 {
            NO_SUCCESS_EXIT_STATUS
        } else {
            i32::try_from(self.failure).unwrap_or(i32::MAX)
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Testing complete: {} successes, {} failures, {} failures marked TODO, {} skipped.",
            self.success, self.failure, self.todo, self.skip
        )
    }
}

/// Context printed as comments right after the plan line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHeader {
    /// Where the definitions were read from.
    pub source: Option<String>,
    /// Name and version of the classification oracle.
    pub oracle: Option<String>,
}

/// One numbered line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// 1-based position in delivery order.
    pub sequence: usize,
    pub definition: Definition,
    pub verdict: Verdict,
}

impl ReportEntry {
    pub fn description(&self) -> String {
        format!("Phyloreference '{}'", self.definition.display_label())
    }
}

/// Ordered verdicts for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub header: ReportHeader,
    pub entries: Vec<ReportEntry>,
    pub counts: ReportCounts,
}

impl Report {
    pub fn exit_status(&self) -> i32 {
        self.counts.exit_status()
    }

    pub fn summary_line(&self) -> String {
        self.counts.summary_line()
    }
}
