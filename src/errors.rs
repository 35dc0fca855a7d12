//! Error types for the parsing and configuration boundary.
//!
//! The reducer itself never fails: unknown ids are silent no-ops.
//! Errors only arise when turning outside input into engine types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown card id: {0:?}")]
    UnknownCard(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
