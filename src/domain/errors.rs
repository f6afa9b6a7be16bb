//! Domain errors for phyloreference verification.

use thiserror::Error;

use super::models::DefinitionId;

/// Errors raised while reading facts from the knowledge graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A status annotation did not have the `{status, start?, end?}` shape.
    #[error("Unrecognized status annotation on {definition}: {detail}")]
    UnrecognizedStatusAnnotation {
        definition: DefinitionId,
        detail: String,
    },

    #[error("Definition not found in graph: {0}")]
    DefinitionNotFound(DefinitionId),

    #[error("Clade definition root class '{0}' is not defined in the graph")]
    MissingDefinitionRoot(String),
}

/// Errors raised by the classification oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Query for {expression} failed: {reason}")]
    QueryFailed { expression: String, reason: String },

    #[error("Oracle reported an inconsistent graph: {0}")]
    Inconsistent(String),
}

/// Errors that abort a verification run before any verdict is produced.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Configuration inconsistency: {0}")]
    ConfigurationInconsistency(#[source] GraphError),

    #[error("Could not list clade definitions: {0}")]
    Listing(#[source] GraphError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),
}

pub type VerifyResult<T> = Result<T, VerifyError>;
