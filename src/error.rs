//! Boundary errors.
//!
//! Dataset problems are reported as validation issues, not errors. This type
//! only covers loading and writing files.

use std::path::PathBuf;

/// Errors raised while reading or writing datasets, configs, and exports.
#[derive(Debug, thiserror::Error)]
pub enum CourseMatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result alias for boundary operations.
pub type Result<T> = std::result::Result<T, CourseMatchError>;
