//! Infrastructure layer module
//!
//! Adapters behind the domain ports and process-level concerns:
//! - Fixture-backed knowledge graph and classification oracle
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod fixture;
pub mod logging;
