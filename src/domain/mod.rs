//! Domain layer for phyloreference verification
//!
//! This module contains the data model and the collaborator ports.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{GraphError, OracleError, VerifyError, VerifyResult};
