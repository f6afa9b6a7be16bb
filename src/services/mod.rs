pub mod node_set_reconciler;
pub mod report_aggregator;
pub mod resolution_service;
pub mod specifier_diagnostics;
pub mod status_history;
pub mod verdict_classifier;
pub mod verification_runner;

pub use node_set_reconciler::{reconcile, NodeDisplay};
pub use report_aggregator::{emit, render_tap, write_tap, ReportAggregator};
pub use resolution_service::{resolve, Resolution};
pub use specifier_diagnostics::find_unmatched_specifiers;
pub use status_history::{compute_expected_resolution, ExpectedResolution};
pub use verdict_classifier::{ClassificationInput, VerdictClassifier};
pub use verification_runner::{RunOptions, VerificationRunner};
