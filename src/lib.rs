//! phyloverify - Phyloreference verification
//!
//! Tests clade definitions (phyloreferences) against the phylogeny nodes they
//! are expected to resolve to, taking each definition's publication status
//! and unmatched specifiers into account, and reports the verdicts as TAP.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Data model, errors and the collaborator ports
//! - **Service Layer** (`services`): Status history, reconciliation, classification and reporting
//! - **Infrastructure Layer** (`infrastructure`): Fixture adapters, configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use phyloverify::infrastructure::fixture::{load_fixture_input, AssertedOracle, FixtureGraph};
//! use phyloverify::services::{render_tap, RunOptions, VerificationRunner};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let document = load_fixture_input("phylorefs.json", None)?;
//!     let oracle = AssertedOracle::from_document(&document);
//!     let graph = FixtureGraph::new(document);
//!     let report = VerificationRunner::new(&graph, &oracle, RunOptions::default()).run().await?;
//!     print!("{}", render_tap(&report));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{GraphError, OracleError, VerifyError, VerifyResult};
pub use domain::models::{
    Config, Definition, DefinitionId, LoggingConfig, NodeId, NodeSet, Outcome,
    PublicationStatus, Report, ReportConfig, ReportCounts, Specifier, SpecifierId, StatusRecord,
    Verdict,
};
pub use domain::ports::{ClassExpression, ClassificationOracle, KnowledgeGraph};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::fixture::{AssertedOracle, FixtureDocument, FixtureGraph};
pub use services::{
    compute_expected_resolution, emit, reconcile, render_tap, resolve, NodeDisplay,
    RunOptions, VerdictClassifier, VerificationRunner,
};
