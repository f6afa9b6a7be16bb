//! Knowledge-graph access port.
//!
//! Implementations hold already-fetched, already-validated facts; generic
//! graph walking stays behind this trait and callers only see typed values.

use crate::domain::errors::GraphError;
use crate::domain::models::{Definition, DefinitionId, SpecifierId, StatusRecord};

/// IRI of the class every clade definition is (transitively) typed as.
pub const CLADE_DEFINITION_ROOT: &str =
    "http://ontology.phyloref.org/phyloref.owl#Phyloreference";

/// Read-only access to the facts asserted about definitions and specifiers.
pub trait KnowledgeGraph: Send + Sync {
    /// Human-readable description of where the facts came from.
    fn source(&self) -> Option<String> {
        None
    }

    /// Every definition transitively typed as a clade definition, excluding
    /// meta-level helper classes, in delivery order. Labels are left unset.
    fn list_definitions(&self) -> Result<Vec<Definition>, GraphError>;

    /// Status history asserted for a definition.
    ///
    /// Fails with [`GraphError::UnrecognizedStatusAnnotation`] when an
    /// annotation does not have the expected shape.
    fn statuses_of(&self, definition: &DefinitionId) -> Result<Vec<StatusRecord>, GraphError>;

    /// Targets of the asserted "has unmatched specifier" relation from
    /// `definition`. No inference is attempted.
    fn unmatched_specifiers_of(
        &self,
        definition: &DefinitionId,
    ) -> Result<Vec<SpecifierId>, GraphError>;

    /// Label for any entity, trying `preferred_langs` in order and then
    /// untagged labels.
    fn label_of(&self, entity: &str, preferred_langs: &[String]) -> Option<String>;
}
