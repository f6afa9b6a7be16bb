//! Runs every clade definition in a graph through the verification pipeline.

use futures::stream::{self, StreamExt, TryStreamExt};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{GraphError, OracleError, VerifyError, VerifyResult};
use crate::domain::models::{
    Definition, NodeSet, Report, ReportConfig, ReportHeader, Specifier, StatusRecord, Verdict,
};
use crate::domain::ports::{ClassExpression, ClassificationOracle, KnowledgeGraph};
use crate::services::node_set_reconciler::{reconcile, NodeDisplay};
use crate::services::report_aggregator::ReportAggregator;
use crate::services::specifier_diagnostics::find_unmatched_specifiers;
use crate::services::status_history::compute_expected_resolution;
use crate::services::verdict_classifier::{ClassificationInput, VerdictClassifier};

/// Options for a verification run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub preferred_languages: Vec<String>,
    pub strip_uri_prefixes: Vec<String>,
    /// Oracle queries in flight at once; 1 runs definitions one at a time.
    pub concurrency: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::from(&ReportConfig::default())
    }
}

impl From<&ReportConfig> for RunOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            preferred_languages: config.preferred_languages.clone(),
            strip_uri_prefixes: config.strip_uri_prefixes.clone(),
            concurrency: config.concurrency,
        }
    }
}

/// Everything known about one definition before it is classified.
#[derive(Debug)]
struct DefinitionFacts {
    definition: Definition,
    resolved: Result<NodeSet, OracleError>,
    expected: Result<NodeSet, OracleError>,
    statuses: Vec<StatusRecord>,
    unmatched: BTreeSet<Specifier>,
}

/// Gathers facts from the collaborators, classifies each definition and
/// aggregates the verdicts into a report.
pub struct VerificationRunner<'a> {
    graph: &'a dyn KnowledgeGraph,
    oracle: &'a dyn ClassificationOracle,
    options: RunOptions,
}

impl<'a> VerificationRunner<'a> {
    pub fn new(
        graph: &'a dyn KnowledgeGraph,
        oracle: &'a dyn ClassificationOracle,
        options: RunOptions,
    ) -> Self {
        Self {
            graph,
            oracle,
            options,
        }
    }

    /// Definitions in delivery order, labelled in the preferred languages.
    pub fn definitions(&self) -> VerifyResult<Vec<Definition>> {
        let mut definitions = self.graph.list_definitions().map_err(VerifyError::Listing)?;
        for definition in &mut definitions {
            if definition.label.is_none() {
                definition.label = self
                    .graph
                    .label_of(definition.id.as_str(), &self.options.preferred_languages);
            }
        }
        Ok(definitions)
    }

    /// Verify every definition.
    ///
    /// Fact gathering may run concurrently, but the report keeps delivery
    /// order. A malformed status annotation aborts the run before any
    /// verdict exists; an oracle failure only fails its own definition.
    pub async fn run(&self) -> VerifyResult<Report> {
        let definitions = self.definitions()?;
        info!(
            count = definitions.len(),
            oracle = %self.oracle.name(),
            "clade definitions identified"
        );

        let facts: Vec<DefinitionFacts> = stream::iter(definitions)
            .map(|definition| self.gather(definition))
            .buffered(self.options.concurrency.max(1))
            .try_collect()
            .await?;

        let classifier =
            VerdictClassifier::with_display(NodeDisplay::new(self.options.strip_uri_prefixes.clone()));
        let mut aggregator = ReportAggregator::new(ReportHeader {
            source: self.graph.source(),
            oracle: Some(self.oracle.name()),
        });

        for facts in facts {
            let verdict = classify_facts(&classifier, &facts);
            aggregator.push(facts.definition, verdict);
        }

        Ok(aggregator.finish())
    }

    #[instrument(skip_all, fields(definition = %definition.id))]
    async fn gather(&self, definition: Definition) -> VerifyResult<DefinitionFacts> {
        let statuses = self
            .graph
            .statuses_of(&definition.id)
            .map_err(|err| match err {
                err @ GraphError::UnrecognizedStatusAnnotation { .. } => {
                    VerifyError::ConfigurationInconsistency(err)
                }
                other => VerifyError::Graph(other),
            })?;
        let unmatched =
            find_unmatched_specifiers(&definition, self.graph, &self.options.preferred_languages)?;

        let resolved = self
            .oracle
            .instances_of(&ClassExpression::Definition(definition.id.clone()))
            .await;
        let expected = self
            .oracle
            .instances_of(&ClassExpression::ExpectedResolutionOf(definition.id.clone()))
            .await;

        debug!(
            statuses = statuses.len(),
            unmatched = unmatched.len(),
            resolved = ?resolved.as_ref().map(NodeSet::len).ok(),
            expected = ?expected.as_ref().map(NodeSet::len).ok(),
            "facts gathered"
        );

        Ok(DefinitionFacts {
            definition,
            resolved,
            expected,
            statuses,
            unmatched,
        })
    }
}

fn classify_facts(classifier: &VerdictClassifier, facts: &DefinitionFacts) -> Verdict {
    let (resolved, expected) = match (&facts.resolved, &facts.expected) {
        (Ok(resolved), Ok(expected)) => (resolved, expected),
        (Err(err), _) | (_, Err(err)) => {
            warn!(definition = %facts.definition.id, error = %err, "oracle query failed");
            return Verdict::fail(format!(
                "Could not determine the nodes for this phyloreference: {err}"
            ));
        }
    };

    let reconciliation = reconcile(resolved, expected);
    let expectation = compute_expected_resolution(&facts.statuses);
    classifier.classify(&ClassificationInput {
        reconciliation: &reconciliation,
        expectation: &expectation,
        unmatched_specifiers: &facts.unmatched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DefinitionId, NodeId, Outcome, SpecifierId};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MemoryGraph {
        definitions: Vec<Definition>,
        statuses: HashMap<String, Vec<StatusRecord>>,
        broken_status: Option<String>,
    }

    impl KnowledgeGraph for MemoryGraph {
        fn source(&self) -> Option<String> {
            Some("memory".to_string())
        }

        fn list_definitions(&self) -> Result<Vec<Definition>, GraphError> {
            Ok(self.definitions.clone())
        }

        fn statuses_of(&self, definition: &DefinitionId) -> Result<Vec<StatusRecord>, GraphError> {
            if self.broken_status.as_deref() == Some(definition.as_str()) {
                return Err(GraphError::UnrecognizedStatusAnnotation {
                    definition: definition.clone(),
                    detail: "expected an object".to_string(),
                });
            }
            Ok(self.statuses.get(definition.as_str()).cloned().unwrap_or_default())
        }

        fn unmatched_specifiers_of(
            &self,
            _: &DefinitionId,
        ) -> Result<Vec<SpecifierId>, GraphError> {
            Ok(vec![])
        }

        fn label_of(&self, entity: &str, _: &[String]) -> Option<String> {
            entity.strip_prefix('#').map(|s| format!("label {s}"))
        }
    }

    #[derive(Default)]
    struct MemoryOracle {
        resolved: HashMap<String, Vec<&'static str>>,
        expected: HashMap<String, Vec<&'static str>>,
        failing: Option<String>,
        queries: AtomicUsize,
    }

    #[async_trait]
    impl ClassificationOracle for MemoryOracle {
        fn name(&self) -> String {
            "memory/0".to_string()
        }

        async fn instances_of(&self, expression: &ClassExpression) -> Result<NodeSet, OracleError> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            let id = expression.definition().as_str();
            if self.failing.as_deref() == Some(id) {
                return Err(OracleError::Inconsistent("unsatisfiable".to_string()));
            }
            let table = match expression {
                ClassExpression::Definition(_) => &self.resolved,
                ClassExpression::ExpectedResolutionOf(_) => &self.expected,
            };
            Ok(table
                .get(id)
                .map(|nodes| nodes.iter().map(|n| NodeId::new(*n)).collect())
                .unwrap_or_default())
        }
    }

    fn two_definitions() -> (MemoryGraph, MemoryOracle) {
        let graph = MemoryGraph {
            definitions: vec![Definition::new("#d1"), Definition::new("#d2")],
            ..Default::default()
        };
        let mut oracle = MemoryOracle::default();
        oracle.resolved.insert("#d1".into(), vec!["n1"]);
        oracle.expected.insert("#d1".into(), vec!["n1"]);
        oracle.resolved.insert("#d2".into(), vec!["n3"]);
        oracle.expected.insert("#d2".into(), vec!["n4"]);
        (graph, oracle)
    }

    #[tokio::test]
    async fn test_run_produces_ordered_report() {
        let (graph, oracle) = two_definitions();
        let runner = VerificationRunner::new(&graph, &oracle, RunOptions::default());
        let report = runner.run().await.unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].sequence, 1);
        assert_eq!(report.entries[0].definition.display_label(), "label d1");
        assert_eq!(report.entries[0].verdict.outcome, Outcome::Pass);
        assert_eq!(report.entries[1].verdict.outcome, Outcome::Fail);
        assert_eq!(report.exit_status(), 1);
        assert_eq!(report.header.source.as_deref(), Some("memory"));
        assert_eq!(report.header.oracle.as_deref(), Some("memory/0"));
        assert_eq!(oracle.queries.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_concurrent_run_keeps_delivery_order() {
        let (mut graph, mut oracle) = two_definitions();
        for i in 3..20 {
            let id = format!("#d{i}");
            graph.definitions.push(Definition::new(id.as_str()));
            oracle.resolved.insert(id.clone(), vec!["n1"]);
            oracle.expected.insert(id, vec!["n1"]);
        }
        let options = RunOptions {
            concurrency: 8,
            ..RunOptions::default()
        };
        let report = VerificationRunner::new(&graph, &oracle, options)
            .run()
            .await
            .unwrap();

        let ids: Vec<&str> = report.entries.iter().map(|e| e.definition.id.as_str()).collect();
        let expected: Vec<String> = (1..20).map(|i| format!("#d{i}")).collect();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
        let sequences: Vec<usize> = report.entries.iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, (1..20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_malformed_status_aborts_run() {
        let (mut graph, oracle) = two_definitions();
        graph.broken_status = Some("#d2".to_string());
        let result = VerificationRunner::new(&graph, &oracle, RunOptions::default())
            .run()
            .await;
        assert!(matches!(
            result,
            Err(VerifyError::ConfigurationInconsistency(
                GraphError::UnrecognizedStatusAnnotation { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_oracle_failure_fails_only_that_definition() {
        let (graph, mut oracle) = two_definitions();
        oracle.failing = Some("#d2".to_string());
        let report = VerificationRunner::new(&graph, &oracle, RunOptions::default())
            .run()
            .await
            .unwrap();
        assert_eq!(report.entries[0].verdict.outcome, Outcome::Pass);
        assert_eq!(report.entries[1].verdict.outcome, Outcome::Fail);
        assert!(report.entries[1]
            .verdict
            .has_comment_containing("Could not determine the nodes"));
    }

    #[tokio::test]
    async fn test_empty_graph_reports_sentinel() {
        let graph = MemoryGraph::default();
        let oracle = MemoryOracle::default();
        let report = VerificationRunner::new(&graph, &oracle, RunOptions::default())
            .run()
            .await
            .unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.exit_status(), crate::domain::models::NO_SUCCESS_EXIT_STATUS);
    }
}
