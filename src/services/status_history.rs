use crate::domain::models::StatusRecord;

/// Whether a definition is currently expected to resolve, and the statuses
/// that decided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedResolution {
    pub expected_to_resolve: bool,
    pub active_statuses: Vec<StatusRecord>,
}

impl ExpectedResolution {
    /// Any active status is a draft.
    pub fn has_draft_status(&self) -> bool {
        self.active_statuses
            .iter()
            .any(|record| record.status == crate::domain::models::PublicationStatus::Draft)
    }
}

/// Derives the expected outcome of a definition from its status history.
///
/// Only active records count (started, not ended). With no active record the
/// definition is assumed to be expected to resolve; otherwise it is expected
/// to resolve iff at least one active record is submitted or published.
/// Never fails: malformed bounds were already mapped to extreme instants when
/// the records were built.
pub fn compute_expected_resolution(records: &[StatusRecord]) -> ExpectedResolution {
    let active_statuses: Vec<StatusRecord> = records
        .iter()
        .filter(|record| record.is_active())
        .cloned()
        .collect();

    let expected_to_resolve = active_statuses.is_empty()
        || active_statuses
            .iter()
            .any(|record| record.status.expects_resolution());

    ExpectedResolution {
        expected_to_resolve,
        active_statuses,
    }
}
