//! Unified entry point for the three ways a run obtains its providers.

use std::fmt;
use std::path::PathBuf;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use hcp_model::{HcpRecord, PipelineOptions, SyntheticOptions};

use crate::error::Result;
use crate::reader::read_hcp_table;
use crate::schema::records_from_frame;
use crate::synthetic::generate_hcp_data;

/// Where the provider table for a run comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Seeded synthetic generation; no I/O.
    Synthetic(SyntheticOptions),
    /// A CSV file with the provider schema.
    Csv(PathBuf),
    /// An already-loaded table, validated the same way as a CSV.
    Frame(DataFrame),
}

impl DataSource {
    /// Materializes the records for one run.
    pub fn load(&self, options: &PipelineOptions) -> Result<Vec<HcpRecord>> {
        let span = info_span!("ingest", source = %self);
        let _guard = span.enter();
        let records = match self {
            DataSource::Synthetic(synthetic) => generate_hcp_data(synthetic)?,
            DataSource::Csv(path) => {
                let df = read_hcp_table(path)?;
                records_from_frame(&df, options)?
            }
            DataSource::Frame(df) => records_from_frame(df, options)?,
        };
        info!(records = records.len(), "providers loaded");
        Ok(records)
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, DataSource::Synthetic(_))
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Synthetic(SyntheticOptions::default())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Synthetic(options) => write!(
                f,
                "synthetic (seed {}, {} providers)",
                options.seed, options.count
            ),
            DataSource::Csv(path) => write!(f, "{}", path.display()),
            DataSource::Frame(df) => write!(f, "in-memory table ({} rows)", df.height()),
        }
    }
}
