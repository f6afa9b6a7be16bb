//! Fixture-backed collaborators
//!
//! A fixture file holds an already-reasoned knowledge graph:
//! - `FixtureGraph` serves definitions, statuses, specifiers and labels
//! - `AssertedOracle` answers instance queries from asserted memberships

pub mod document;
pub mod graph;
pub mod loader;
pub mod oracle;

pub use document::{ClassEntry, FixtureDocument, IndividualEntry, LabelValue};
pub use graph::{FixtureGraph, CLADE_DEFINITION_ROOT_CURIE};
pub use loader::{load_fixture, load_fixture_input, FixtureError, FixtureFormat};
pub use oracle::AssertedOracle;
