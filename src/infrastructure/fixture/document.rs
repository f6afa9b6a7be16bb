//! Serialized shape of a fixture knowledge graph.
//!
//! A fixture is a pre-reasoned graph: class memberships are already
//! asserted, so no reasoning is needed to answer instance queries.

use serde::{Deserialize, Serialize};

/// Label literal, either a bare string or a language-tagged value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    Plain(String),
    Tagged {
        value: String,
        #[serde(default)]
        lang: Option<String>,
    },
}

impl LabelValue {
    pub fn value(&self) -> &str {
        match self {
            Self::Plain(value) | Self::Tagged { value, .. } => value,
        }
    }

    /// Language tag, `None` for untagged literals (an empty tag counts as untagged).
    pub fn lang(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Tagged { lang, .. } => lang.as_deref().filter(|l| !l.is_empty()),
        }
    }
}

/// A class in the graph. Clade definitions are classes below the
/// clade-definition root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub id: String,
    #[serde(default)]
    pub labels: Vec<LabelValue>,
    #[serde(default)]
    pub subclass_of: Vec<String>,
    /// Meta-level helper classes are never tested.
    #[serde(default)]
    pub helper: bool,
    #[serde(default)]
    pub specifiers: Vec<String>,
    /// Targets of the "has unmatched specifier" relation.
    #[serde(default)]
    pub unmatched_specifiers: Vec<String>,
    /// Individuals asserted as the specified output of a process whose
    /// input was this class.
    #[serde(default)]
    pub expected_nodes: Vec<String>,
    /// Raw status annotations; their shape is checked when they are read.
    #[serde(default)]
    pub statuses: Vec<serde_json::Value>,
}

/// A named individual: a tree node or a specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualEntry {
    pub id: String,
    #[serde(default)]
    pub labels: Vec<LabelValue>,
    /// Classes this individual is asserted to be an instance of.
    #[serde(default)]
    pub types: Vec<String>,
    /// Classes this individual is asserted not to be an instance of.
    #[serde(default)]
    pub not_types: Vec<String>,
}

/// Root of a fixture file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureDocument {
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
    #[serde(default)]
    pub individuals: Vec<IndividualEntry>,
}

/// The only accepted status-annotation shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct StatusAnnotation {
    pub status: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_forms() {
        let labels: Vec<LabelValue> =
            serde_json::from_str(r#"["plain", {"value": "tagged", "lang": "en"}, {"value": "x", "lang": ""}]"#)
                .unwrap();
        assert_eq!(labels[0].value(), "plain");
        assert_eq!(labels[0].lang(), None);
        assert_eq!(labels[1].lang(), Some("en"));
        assert_eq!(labels[2].lang(), None);
    }

    #[test]
    fn test_minimal_document() {
        let doc: FixtureDocument = serde_json::from_str(r#"{"classes": [{"id": "c"}]}"#).unwrap();
        assert_eq!(doc.classes.len(), 1);
        assert!(doc.individuals.is_empty());
        assert!(!doc.classes[0].helper);
    }

    #[test]
    fn test_status_annotation_shape() {
        let ok: Result<StatusAnnotation, _> =
            serde_json::from_value(serde_json::json!({"status": "pso:draft", "start": "2019-01-01", "end": null}));
        assert!(ok.is_ok());

        let extra: Result<StatusAnnotation, _> =
            serde_json::from_value(serde_json::json!({"status": "pso:draft", "when": "now"}));
        assert!(extra.is_err());

        let bare: Result<StatusAnnotation, _> = serde_json::from_value(serde_json::json!("pso:draft"));
        assert!(bare.is_err());
    }
}
