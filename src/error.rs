//! Error types for the bytesniff inspector.
//!
//! Only loading the input is fatal. Decompression failures live in
//! [`crate::inflate::DecodeError`] and are absorbed by the inflate scan.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for inspection runs.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The input file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration asks for something no inspection can do.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The report could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for inspector operations.
pub type Result<T> = std::result::Result<T, InspectError>;
