use std::collections::BTreeSet;

use crate::domain::errors::GraphError;
use crate::domain::models::{Definition, Specifier};
use crate::domain::ports::KnowledgeGraph;

/// Specifiers the graph asserts as unmatched for `definition`.
///
/// Reads the asserted "has unmatched specifier" relation only. Labels are
/// looked up so comments can name the specifier.
pub fn find_unmatched_specifiers(
    definition: &Definition,
    graph: &dyn KnowledgeGraph,
    preferred_langs: &[String],
) -> Result<BTreeSet<Specifier>, GraphError> {
    let unmatched = graph
        .unmatched_specifiers_of(&definition.id)?
        .into_iter()
        .map(|id| {
            let label = graph.label_of(id.as_str(), preferred_langs);
            Specifier { id, label }
        })
        .collect();
    Ok(unmatched)
}
