//! Error types for replay-stats-core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for replay-stats operations
///
/// The table engine itself never fails; these variants only cover
/// loading match documents, exporting tables and persisting config.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse match file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid match file {path}: {reason}")]
    InvalidMatchFile { path: PathBuf, reason: String },

    #[error("Replay directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for replay-stats operations
pub type Result<T> = std::result::Result<T, Error>;
