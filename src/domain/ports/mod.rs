//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that infrastructure adapters must implement:
//! - KnowledgeGraph: asserted facts about definitions, specifiers and statuses
//! - ClassificationOracle: class-expression instance queries
//!
//! These traits keep the verification engine independent of how facts are
//! parsed or how reasoning is carried out.

pub mod classification_oracle;
pub mod knowledge_graph;

pub use classification_oracle::{ClassExpression, ClassificationOracle};
pub use knowledge_graph::{KnowledgeGraph, CLADE_DEFINITION_ROOT};
