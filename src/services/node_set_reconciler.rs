use crate::domain::models::{NodeId, NodeSet, ReconciliationResult};

/// Diff resolved against expected nodes by canonical id.
///
/// `missing = expected - resolved`, `extra = resolved - expected`. Ids are
/// compared as given; prefix stripping belongs to [`NodeDisplay`] and only
/// ever sees the finished diff.
pub fn reconcile(resolved: &NodeSet, expected: &NodeSet) -> ReconciliationResult {
    ReconciliationResult {
        missing: expected.difference(resolved).cloned().collect(),
        extra: resolved.difference(expected).cloned().collect(),
        resolved: resolved.clone(),
        expected: expected.clone(),
    }
}

/// Renders node ids for humans, stripping configured URI prefixes.
#[derive(Debug, Clone, Default)]
pub struct NodeDisplay {
    prefixes: Vec<String>,
}

impl NodeDisplay {
    pub fn new(prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Strip the first matching prefix, leaving ids without one untouched.
    pub fn strip<'a>(&self, id: &'a str) -> &'a str {
        self.prefixes
            .iter()
            .find_map(|prefix| id.strip_prefix(prefix.as_str()))
            .unwrap_or(id)
    }

    pub fn node(&self, node: &NodeId) -> String {
        self.strip(node.as_str()).to_string()
    }

    /// `[a, b, c]` in set order.
    pub fn set(&self, nodes: &NodeSet) -> String {
        let rendered: Vec<&str> = nodes.iter().map(|n| self.strip(n.as_str())).collect();
        format!("[{}]", rendered.join(", "))
    }
}
