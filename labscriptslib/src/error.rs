//! Error types for labscriptslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while formatting tables or stripping markup
#[derive(Error, Debug)]
pub enum LabscriptsError {
    /// A data row does not have exactly `COL_COUNT` fields.
    ///
    /// The message is fixed; `line` (1-based) and `found` are kept for
    /// callers and debug logging.
    #[error("Invalid line length")]
    InvalidLineLength { line: usize, found: usize },

    /// Failed to read a data file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
