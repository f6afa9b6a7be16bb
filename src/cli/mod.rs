//! Command-line interface
//!
//! clap definitions for `phyloverify test` and `phyloverify resolve`, plus
//! the error reporting shared by both.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{resolve::ResolveArgs, test::TestArgs};

/// Exit status for input and configuration errors
pub const INPUT_ERROR_EXIT_STATUS: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "phyloverify")]
#[command(about = "Test phyloreferences against their expected resolution", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file layered over .phyloverify/config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test every phyloreference in a fixture and write a TAP report
    Test(TestArgs),

    /// List the nodes each phyloreference resolves to
    Resolve(ResolveArgs),
}

/// Print an error with its cause chain to stderr and return the exit status.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    tracing::error!(error = %err, "command failed");
    eprintln!("Error: {err:#}");
    INPUT_ERROR_EXIT_STATUS
}
