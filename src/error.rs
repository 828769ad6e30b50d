//! Centralized error handling for rigcheck

use std::io;
use thiserror::Error;

/// Custom error type for rigcheck operations.
///
/// The analyzer itself never fails; these cover the catalog, config and CLI
/// layers around it.
#[derive(Debug, Error)]
pub enum RigcheckError {
    /// I/O errors (file reading, output writing)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Parsing errors (invalid TOML, bad values)
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
    /// Catalog lookup errors (unknown id, wrong category)
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl From<toml::de::Error> for RigcheckError {
    fn from(error: toml::de::Error) -> Self {
        RigcheckError::Parse(error.to_string())
    }
}

impl From<serde_json::Error> for RigcheckError {
    fn from(error: serde_json::Error) -> Self {
        RigcheckError::Parse(error.to_string())
    }
}

/// Type alias for Results in rigcheck
pub type Result<T> = std::result::Result<T, RigcheckError>;
