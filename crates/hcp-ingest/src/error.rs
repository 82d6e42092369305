//! Error types for HCP data ingestion.

use std::path::PathBuf;
use thiserror::Error;

use hcp_model::SchemaError;

/// Errors that can occur while loading or generating provider data.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse the CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Schema Errors ===
    /// The table does not match the provider schema.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    // === Generation Errors ===
    /// Invalid sampling distribution parameters.
    #[error("invalid synthetic distribution: {message}")]
    Distribution { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl IngestError {
    /// Returns the schema violation when this is a schema error.
    pub fn as_schema(&self) -> Option<&SchemaError> {
        match self {
            IngestError::Schema(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/hcp.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/hcp.csv");
    }

    #[test]
    fn test_error_from_schema() {
        let err: IngestError = SchemaError::MissingColumn {
            column: "NPI Id".to_string(),
        }
        .into();
        assert_eq!(err.as_schema().map(SchemaError::column), Some("NPI Id"));
        assert_eq!(
            err.to_string(),
            "schema error: required column 'NPI Id' not found"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("score".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
