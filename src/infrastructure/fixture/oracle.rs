use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::errors::OracleError;
use crate::domain::models::{NodeId, NodeSet};
use crate::domain::ports::{ClassExpression, ClassificationOracle};

use super::document::FixtureDocument;

/// Oracle that answers from asserted class memberships instead of reasoning.
///
/// Suitable for graphs that were reasoned over ahead of time.
#[derive(Debug, Clone, Default)]
pub struct AssertedOracle {
    members: HashMap<String, NodeSet>,
    non_members: HashMap<String, NodeSet>,
    expected: HashMap<String, NodeSet>,
}

impl AssertedOracle {
    pub fn from_document(document: &FixtureDocument) -> Self {
        let mut oracle = Self::default();

        for individual in &document.individuals {
            for class in &individual.types {
                oracle
                    .members
                    .entry(class.clone())
                    .or_default()
                    .insert(NodeId::new(individual.id.as_str()));
            }
            for class in &individual.not_types {
                oracle
                    .non_members
                    .entry(class.clone())
                    .or_default()
                    .insert(NodeId::new(individual.id.as_str()));
            }
        }

        for class in &document.classes {
            oracle.expected.insert(
                class.id.clone(),
                class
                    .expected_nodes
                    .iter()
                    .map(|id| NodeId::new(id.as_str()))
                    .collect(),
            );
        }

        oracle
    }

    fn lookup(table: &HashMap<String, NodeSet>, class: &str) -> NodeSet {
        table.get(class).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl ClassificationOracle for AssertedOracle {
    fn name(&self) -> String {
        format!("asserted-membership/{}", env!("CARGO_PKG_VERSION"))
    }

    async fn instances_of(&self, expression: &ClassExpression) -> Result<NodeSet, OracleError> {
        match expression {
            ClassExpression::Definition(id) => {
                let members = Self::lookup(&self.members, id.as_str());
                let denied = Self::lookup(&self.non_members, id.as_str());
                let conflicting: Vec<&str> =
                    members.intersection(&denied).map(NodeId::as_str).collect();
                if !conflicting.is_empty() {
                    return Err(OracleError::Inconsistent(format!(
                        "nodes asserted both in and not in {expression}: {}",
                        conflicting.join(", ")
                    )));
                }
                Ok(members)
            }
            ClassExpression::ExpectedResolutionOf(id) => Ok(Self::lookup(&self.expected, id.as_str())),
        }
    }
}
