//! Reports which nodes each definition resolved to, without testing them.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

use crate::domain::errors::{VerifyError, VerifyResult};
use crate::domain::ports::{ClassExpression, ClassificationOracle, KnowledgeGraph};
use crate::services::node_set_reconciler::NodeDisplay;

/// Resolved nodes per definition, keyed by display id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub phylorefs: BTreeMap<String, BTreeSet<String>>,
}

/// Resolve every clade definition in `graph`.
///
/// Ids are stripped for display only after the oracle has answered, so two
/// nodes that differ only by prefix stay distinct in the oracle's answer but
/// may render the same.
pub async fn resolve(
    graph: &dyn KnowledgeGraph,
    oracle: &dyn ClassificationOracle,
    display: &NodeDisplay,
) -> VerifyResult<Resolution> {
    let definitions = graph.list_definitions().map_err(VerifyError::Listing)?;
    let mut resolution = Resolution::default();

    for definition in definitions {
        let nodes = oracle
            .instances_of(&ClassExpression::Definition(definition.id.clone()))
            .await?;
        info!(definition = %definition.id, nodes = nodes.len(), "definition resolved");

        resolution.phylorefs.insert(
            display.strip(definition.id.as_str()).to_string(),
            nodes.iter().map(|node| display.node(node)).collect(),
        );
    }

    Ok(resolution)
}
