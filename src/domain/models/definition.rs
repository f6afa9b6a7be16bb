//! Definitions under test, the specifiers they reference and the nodes they
//! resolve to.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Canonical id string. Equality and ordering use this value.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Text after the last `#` or `/`, or the whole id if neither occurs.
            pub fn short_form(&self) -> &str {
                short_form(&self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identity of a clade definition (phyloreference).
    DefinitionId
);
string_id!(
    /// Identity of a specifier used to construct a clade.
    SpecifierId
);
string_id!(
    /// Identity of a phylogenetic-tree node.
    NodeId
);

fn short_form(id: &str) -> &str {
    let trimmed = id.trim_end_matches(['#', '/']);
    match trimmed.rfind(['#', '/']) {
        Some(idx) if idx + 1 < trimmed.len() => &trimmed[idx + 1..],
        _ => id,
    }
}

/// Ordered node set; ordering keeps report output deterministic.
pub type NodeSet = BTreeSet<NodeId>;

/// A clade definition under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub id: DefinitionId,
    pub label: Option<String>,
    #[serde(default)]
    pub specifiers: BTreeSet<SpecifierId>,
}

impl Definition {
    pub fn new(id: impl Into<DefinitionId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            specifiers: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_specifier(mut self, specifier: impl Into<SpecifierId>) -> Self {
        self.specifiers.insert(specifier.into());
        self
    }

    /// Human label, falling back to the id string.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.id.as_str())
    }
}

/// A specifier referenced by a definition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Specifier {
    pub id: SpecifierId,
    pub label: Option<String>,
}

impl Specifier {
    pub fn new(id: impl Into<SpecifierId>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.id.short_form())
    }
}
