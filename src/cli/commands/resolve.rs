//! Implementation of the `phyloverify resolve` command.

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;
use thiserror::Error;

use crate::cli::output::{output, CommandOutput};
use crate::cli::INPUT_ERROR_EXIT_STATUS;
use crate::domain::errors::{GraphError, VerifyError};
use crate::domain::models::Config;
use crate::infrastructure::fixture::{
    load_fixture_input, AssertedOracle, FixtureError, FixtureFormat, FixtureGraph,
};
use crate::services::{resolve, NodeDisplay, Resolution};

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Fixture to resolve, or `-` to read stdin
    pub input: String,

    /// Fixture serialization (guessed from the file extension when omitted)
    #[arg(long, value_enum)]
    pub format: Option<FixtureFormat>,

    /// Report failures as a JSON object on stdout and exit successfully
    #[arg(long)]
    pub errors_as_json: bool,

    /// Render a table instead of JSON
    #[arg(long)]
    pub table: bool,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ResolveOutput(pub Resolution);

impl CommandOutput for ResolveOutput {
    fn to_human(&self) -> String {
        if self.0.phylorefs.is_empty() {
            return "No phyloreferences found.".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Phyloreference").add_attribute(Attribute::Bold),
                Cell::new("Nodes").add_attribute(Attribute::Bold),
            ]);

        for (phyloref, nodes) in &self.0.phylorefs {
            let nodes = if nodes.is_empty() {
                "-".to_string()
            } else {
                nodes.iter().cloned().collect::<Vec<_>>().join("\n")
            };
            table.add_row(vec![Cell::new(phyloref), Cell::new(nodes)]);
        }

        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Failure of a resolve run, split by the stage that failed.
#[derive(Error, Debug)]
enum ResolveFailure {
    #[error(transparent)]
    Load(#[from] FixtureError),

    #[error(transparent)]
    Resolve(#[from] VerifyError),
}

impl ResolveFailure {
    fn summary(&self) -> &'static str {
        match self {
            Self::Load(FixtureError::Io { .. }) => "Could not read fixture",
            Self::Load(_) => "Could not parse fixture",
            Self::Resolve(VerifyError::Listing(GraphError::MissingDefinitionRoot(_))) => {
                "No phyloreferences were present"
            }
            Self::Resolve(VerifyError::Oracle(_)) => "Classification failed",
            Self::Resolve(_) => "Could not resolve phyloreferences",
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.summary(),
            "detail": self.to_string(),
        })
    }
}

async fn run(args: &ResolveArgs, config: &Config) -> Result<Resolution, ResolveFailure> {
    let document = load_fixture_input(&args.input, args.format)?;
    let oracle = AssertedOracle::from_document(&document);
    let graph = FixtureGraph::new(document).with_source(args.input.as_str());
    let display = NodeDisplay::new(config.report.strip_uri_prefixes.iter().cloned());

    Ok(resolve(&graph, &oracle, &display).await?)
}

/// Resolve every phyloreference and print the nodes they resolve to.
pub async fn execute(args: ResolveArgs, config: &Config) -> Result<i32> {
    match run(&args, config).await {
        Ok(resolution) => {
            output(&ResolveOutput(resolution), !args.table);
            Ok(0)
        }
        Err(failure) if args.errors_as_json => {
            let rendered = serde_json::to_string(&failure.to_json())
                .context("Failed to serialize error")?;
            println!("{rendered}");
            Ok(0)
        }
        Err(failure) => {
            tracing::error!(error = %failure, input = %args.input, "resolve failed");
            eprintln!("{} '{}': {failure}", failure.summary(), args.input);
            Ok(INPUT_ERROR_EXIT_STATUS)
        }
    }
}
