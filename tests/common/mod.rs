//! Common test utilities for integration tests
//!
//! Provides a small builder for fixture documents plus helpers to write them
//! to temporary files.

#![allow(dead_code)]

use phyloverify::infrastructure::fixture::FixtureDocument;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

pub const ROOT: &str = "phyloref:Phyloreference";
pub const PUBLISHED_SINCE_2020: (&str, &str) = ("pso:published", "2020-01-01");
pub const DRAFT_SINCE_2020: (&str, &str) = ("pso:draft", "2020-01-01");

/// Builder for fixture documents.
#[derive(Debug, Default)]
pub struct FixtureBuilder {
    classes: Vec<Value>,
    individuals: Vec<(String, Vec<String>)>,
    extra_individuals: Vec<Value>,
}

/// One phyloreference in a fixture.
#[derive(Debug, Clone)]
pub struct PhylorefSpec {
    pub id: String,
    pub label: Option<String>,
    pub resolved: Vec<String>,
    pub expected: Vec<String>,
    pub statuses: Vec<Value>,
    pub unmatched: Vec<String>,
}

impl PhylorefSpec {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: None,
            resolved: Vec::new(),
            expected: Vec::new(),
            statuses: Vec::new(),
            unmatched: Vec::new(),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn resolves_to(mut self, nodes: &[&str]) -> Self {
        self.resolved = nodes.iter().map(ToString::to_string).collect();
        self
    }

    pub fn expects(mut self, nodes: &[&str]) -> Self {
        self.expected = nodes.iter().map(ToString::to_string).collect();
        self
    }

    pub fn status(mut self, (status, start): (&str, &str)) -> Self {
        self.statuses.push(json!({"status": status, "start": start}));
        self
    }

    pub fn raw_status(mut self, status: Value) -> Self {
        self.statuses.push(status);
        self
    }

    pub fn unmatched(mut self, specifier: &str) -> Self {
        self.unmatched.push(specifier.to_string());
        self
    }
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phyloref(mut self, spec: PhylorefSpec) -> Self {
        let mut class = json!({
            "id": spec.id,
            "subclass_of": [ROOT],
            "specifiers": spec.unmatched,
            "unmatched_specifiers": spec.unmatched,
            "expected_nodes": spec.expected,
            "statuses": spec.statuses,
        });
        if let Some(label) = spec.label {
            class["labels"] = json!([{"value": label, "lang": "en"}]);
        }
        self.classes.push(class);

        for node in spec.resolved {
            match self.individuals.iter_mut().find(|(id, _)| *id == node) {
                Some((_, types)) => types.push(spec.id.clone()),
                None => self.individuals.push((node, vec![spec.id.clone()])),
            }
        }
        self
    }

    pub fn class(mut self, class: Value) -> Self {
        self.classes.push(class);
        self
    }

    pub fn individual(mut self, individual: Value) -> Self {
        self.extra_individuals.push(individual);
        self
    }

    pub fn to_json(&self) -> Value {
        let mut individuals: Vec<Value> = self
            .individuals
            .iter()
            .map(|(id, types)| json!({"id": id, "types": types}))
            .collect();
        individuals.extend(self.extra_individuals.iter().cloned());

        let mut classes = self.classes.clone();
        if classes.is_empty() {
            // The root itself, so the graph is valid but has no definitions
            classes.push(json!({"id": ROOT, "helper": true}));
        }

        json!({"classes": classes, "individuals": individuals})
    }

    pub fn build(&self) -> FixtureDocument {
        serde_json::from_value(self.to_json()).expect("fixture should deserialize")
    }

    /// Write the fixture as JSON into a fresh temporary directory.
    pub fn write(&self) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("phylorefs.json");
        std::fs::write(&path, serde_json::to_vec_pretty(&self.to_json()).unwrap())
            .expect("Failed to write fixture");
        (dir, path)
    }
}

/// Fixture covering the canonical scenarios: one Pass, one ExpectedFail
/// (draft status) and one hard Fail.
pub fn mixed_fixture() -> FixtureBuilder {
    FixtureBuilder::new()
        .phyloref(
            PhylorefSpec::new("#D1")
                .label("Published clade")
                .status(PUBLISHED_SINCE_2020)
                .resolves_to(&["#n1"])
                .expects(&["#n1"]),
        )
        .phyloref(
            PhylorefSpec::new("#D3")
                .label("Draft clade")
                .status(DRAFT_SINCE_2020)
                .resolves_to(&["#n2"])
                .expects(&["#n1"]),
        )
        .phyloref(
            PhylorefSpec::new("#D4")
                .label("Broken clade")
                .resolves_to(&["#n3"])
                .expects(&["#n4"]),
        )
}
