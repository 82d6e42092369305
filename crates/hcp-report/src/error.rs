//! Error types for report exports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing an export.
///
/// An export failure leaves the in-memory results untouched.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build table: {message}")]
    Polars { message: String },

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The output path has no recognised extension.
    #[error("unsupported export format for {path} (expected .csv or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl From<polars::prelude::PolarsError> for ExportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Polars {
            message: err.to_string(),
        }
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
