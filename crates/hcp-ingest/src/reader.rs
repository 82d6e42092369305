//! CSV reading for provider tables.

use std::path::Path;

use polars::prelude::*;
use tracing::{debug, info};

use hcp_common::normalize_header;
use hcp_model::SchemaError;

use crate::error::{IngestError, Result};
use crate::schema::missing_columns;

fn check_file(path: &Path) -> Result<()> {
    std::fs::metadata(path).map(|_| ()).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads the header row and returns normalized column names.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    check_file(path)?;
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let headers = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let columns: Vec<String> = headers.iter().map(normalize_header).collect();
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(columns)
}

/// Reads a provider CSV into a DataFrame.
///
/// Every column is read as a string so identifiers keep leading zeros;
/// numeric parsing happens in [`crate::records_from_frame`]. A header-only
/// file yields an empty frame, not an error.
pub fn read_hcp_table(path: &Path) -> Result<DataFrame> {
    let headers = read_csv_headers(path)?;
    if let Some(column) = missing_columns(&headers).first() {
        return Err(SchemaError::MissingColumn {
            column: (*column).to_string(),
        }
        .into());
    }
    debug!(path = %path.display(), columns = headers.len(), "provider table headers ok");

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded provider table"
    );
    Ok(df)
}
