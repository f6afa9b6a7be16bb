pub mod config;
pub mod definition;
pub mod report;
pub mod status;
pub mod verdict;

pub use config::{Config, LoggingConfig, ReportConfig};
pub use definition::{Definition, DefinitionId, NodeId, NodeSet, Specifier, SpecifierId};
pub use report::{
    Report, ReportCounts, ReportEntry, ReportHeader, NO_SUCCESS_EXIT_STATUS,
};
pub use status::{format_statuses, parse_instant, PublicationStatus, StatusRecord};
pub use verdict::{Outcome, ReconciliationResult, Verdict};
