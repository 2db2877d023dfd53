//! Error types for CSV acquisition and JSON rendering

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised around the parser.
///
/// The tokenizer and document parser never fail: malformed CSV degrades into
/// ragged or empty records. Only reading the source and rendering the output
/// can go wrong.
#[derive(Error, Debug)]
pub enum CsvJsonError {
    /// The source could not be read in full
    #[error("Failed to read CSV source {}: {source}", display_path(.path))]
    ReadError {
        /// Path of the source, if it was a file
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    /// The record set could not be rendered as JSON
    #[error("Failed to serialize records: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Rendered output was not valid UTF-8
    #[error("Serialized output is not valid UTF-8: {0}")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}

impl CsvJsonError {
    pub(crate) fn read(path: Option<PathBuf>, source: io::Error) -> Self {
        CsvJsonError::ReadError { path, source }
    }

    /// Underlying I/O error for read failures
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            CsvJsonError::ReadError { source, .. } => Some(source),
            CsvJsonError::SerializeError(_) | CsvJsonError::InvalidOutput(_) => None,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "<reader>".to_string(),
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CsvJsonError>;
