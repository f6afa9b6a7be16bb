//! Classification oracle port.
//!
//! The oracle is a black box: given a class expression, it returns the
//! individuals that are instances of it. Reasoning itself happens behind
//! this trait.

use async_trait::async_trait;
use std::fmt;

use crate::domain::errors::OracleError;
use crate::domain::models::{DefinitionId, NodeSet};

/// Class expressions the verifier asks the oracle about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassExpression {
    /// The clade definition itself; its instances are the resolved nodes.
    Definition(DefinitionId),
    /// Specified output of a process whose input was the definition; its
    /// instances are the nodes the author expects the definition to resolve to.
    ExpectedResolutionOf(DefinitionId),
}

impl ClassExpression {
    pub const fn definition(&self) -> &DefinitionId {
        match self {
            Self::Definition(id) | Self::ExpectedResolutionOf(id) => id,
        }
    }
}

impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definition(id) => write!(f, "<{id}>"),
            Self::ExpectedResolutionOf(id) => {
                write!(f, "(specified_output_of some (has_specified_input value <{id}>))")
            }
        }
    }
}

/// Trait for classification oracles (description-logic reasoners or
/// pre-reasoned assertion stores).
#[async_trait]
pub trait ClassificationOracle: Send + Sync {
    /// Oracle name and version, shown in the report header.
    fn name(&self) -> String;

    /// All named individuals that are instances of `expression`.
    async fn instances_of(&self, expression: &ClassExpression) -> Result<NodeSet, OracleError>;
}
