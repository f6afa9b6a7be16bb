use std::collections::{HashMap, HashSet};

use crate::domain::errors::GraphError;
use crate::domain::models::{
    Definition, DefinitionId, PublicationStatus, SpecifierId, StatusRecord,
};
use crate::domain::ports::{KnowledgeGraph, CLADE_DEFINITION_ROOT};

use super::document::{ClassEntry, FixtureDocument, LabelValue, StatusAnnotation};

/// Compact spelling of the clade-definition root accepted in fixtures.
pub const CLADE_DEFINITION_ROOT_CURIE: &str = "phyloref:Phyloreference";

fn is_root(id: &str) -> bool {
    id == CLADE_DEFINITION_ROOT || id == CLADE_DEFINITION_ROOT_CURIE
}

/// Knowledge graph backed by a fixture document.
#[derive(Debug, Clone)]
pub struct FixtureGraph {
    document: FixtureDocument,
    source: Option<String>,
    classes: HashMap<String, usize>,
}

impl FixtureGraph {
    pub fn new(document: FixtureDocument) -> Self {
        let classes = document
            .classes
            .iter()
            .enumerate()
            .map(|(idx, class)| (class.id.clone(), idx))
            .collect();
        Self {
            document,
            source: None,
            classes,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub const fn document(&self) -> &FixtureDocument {
        &self.document
    }

    fn class(&self, id: &str) -> Option<&ClassEntry> {
        self.classes.get(id).map(|&idx| &self.document.classes[idx])
    }

    fn class_for(&self, definition: &DefinitionId) -> Result<&ClassEntry, GraphError> {
        self.class(definition.as_str())
            .ok_or_else(|| GraphError::DefinitionNotFound(definition.clone()))
    }

    /// Whether `id` reaches the clade-definition root through `subclass_of`.
    fn is_clade_definition(&self, id: &str) -> bool {
        let mut visited = HashSet::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(class) = self.class(current) else {
                continue;
            };
            for parent in &class.subclass_of {
                if is_root(parent) {
                    return true;
                }
                stack.push(parent.as_str());
            }
        }
        false
    }

    fn root_is_referenced(&self) -> bool {
        self.document
            .classes
            .iter()
            .any(|class| is_root(&class.id) || class.subclass_of.iter().any(|p| is_root(p)))
    }

    fn labels(&self, entity: &str) -> Option<&[LabelValue]> {
        if let Some(class) = self.class(entity) {
            return Some(&class.labels);
        }
        self.document
            .individuals
            .iter()
            .find(|individual| individual.id == entity)
            .map(|individual| individual.labels.as_slice())
    }
}

impl KnowledgeGraph for FixtureGraph {
    fn source(&self) -> Option<String> {
        self.source.clone()
    }

    fn list_definitions(&self) -> Result<Vec<Definition>, GraphError> {
        if !self.root_is_referenced() {
            return Err(GraphError::MissingDefinitionRoot(
                CLADE_DEFINITION_ROOT.to_string(),
            ));
        }

        let definitions = self
            .document
            .classes
            .iter()
            .filter(|class| !class.helper && !is_root(&class.id))
            .filter(|class| self.is_clade_definition(&class.id))
            .map(|class| Definition {
                id: DefinitionId::new(class.id.as_str()),
                label: None,
                specifiers: class
                    .specifiers
                    .iter()
                    .map(|s| SpecifierId::new(s.as_str()))
                    .collect(),
            })
            .collect();
        Ok(definitions)
    }

    fn statuses_of(&self, definition: &DefinitionId) -> Result<Vec<StatusRecord>, GraphError> {
        let class = self.class_for(definition)?;
        class
            .statuses
            .iter()
            .map(|raw| {
                let annotation: StatusAnnotation =
                    serde_json::from_value(raw.clone()).map_err(|err| {
                        GraphError::UnrecognizedStatusAnnotation {
                            definition: definition.clone(),
                            detail: format!("{raw}: {err}"),
                        }
                    })?;
                Ok(StatusRecord::from_raw(
                    PublicationStatus::parse(&annotation.status),
                    annotation.start.as_deref(),
                    annotation.end.as_deref(),
                ))
            })
            .collect()
    }

    fn unmatched_specifiers_of(
        &self,
        definition: &DefinitionId,
    ) -> Result<Vec<SpecifierId>, GraphError> {
        let class = self.class_for(definition)?;
        Ok(class
            .unmatched_specifiers
            .iter()
            .map(|s| SpecifierId::new(s.as_str()))
            .collect())
    }

    fn label_of(&self, entity: &str, preferred_langs: &[String]) -> Option<String> {
        let labels = self.labels(entity)?;

        preferred_langs
            .iter()
            .find_map(|lang| {
                labels
                    .iter()
                    .find(|label| label.lang().is_some_and(|l| l.eq_ignore_ascii_case(lang)))
            })
            .or_else(|| labels.iter().find(|label| label.lang().is_none()))
            .map(|label| label.value().to_string())
    }
}
