//! CSV and JSON export of pipeline tables.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::Serialize;
use tracing::info;

use hcp_model::{ChannelAssignment, HcpRecord, SegmentedHcp};
use hcp_transform::{affinity_frame, ranked_frame, source_frame};

use crate::common::create_output;
use crate::error::{ExportError, Result};

/// File format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Infers the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| ExportError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

fn resolve_format(path: &Path, format: Option<ExportFormat>) -> Result<ExportFormat> {
    match format {
        Some(format) => Ok(format),
        None => ExportFormat::from_path(path),
    }
}

/// Writes `df` as CSV with a header row.
pub fn write_frame_csv<W: Write>(writer: W, df: &mut DataFrame) -> Result<()> {
    CsvWriter::new(writer).include_header(true).finish(df)?;
    Ok(())
}

fn write_export<T, F>(path: &Path, rows: &[T], format: ExportFormat, build: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&[T]) -> polars::prelude::PolarsResult<DataFrame>,
{
    let mut out = create_output(path)?;
    match format {
        ExportFormat::Csv => {
            let mut df = build(rows)?;
            write_frame_csv(&mut out, &mut df)?;
        }
        ExportFormat::Json => serde_json::to_writer_pretty(&mut out, rows)?,
    }
    out.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = rows.len(), %format, "export written");
    Ok(())
}

/// Exports the ranked and segmented table.
///
/// When `format` is `None` it is inferred from the extension of `path`.
pub fn export_ranked(
    path: &Path,
    rows: &[SegmentedHcp],
    format: Option<ExportFormat>,
) -> Result<()> {
    let format = resolve_format(path, format)?;
    write_export(path, rows, format, ranked_frame)
}

/// Exports the channel-affinity table.
pub fn export_affinity(
    path: &Path,
    assignments: &[ChannelAssignment],
    format: Option<ExportFormat>,
) -> Result<()> {
    let format = resolve_format(path, format)?;
    write_export(path, assignments, format, affinity_frame)
}

/// Exports source records with the five input columns.
pub fn export_source(path: &Path, records: &[HcpRecord], format: Option<ExportFormat>) -> Result<()> {
    let format = resolve_format(path, format)?;
    write_export(path, records, format, source_frame)
}
