//! HCP data ingestion.
//!
//! This crate provides the data source stage of the targeting pipeline:
//!
//! - **CSV Loading**: Read a provider table into a Polars DataFrame
//! - **Schema Validation**: Convert a DataFrame into typed [`HcpRecord`]s,
//!   reporting missing columns and invalid cells as [`SchemaError`]s
//! - **Synthetic Data**: Seeded, reproducible provider generation
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use hcp_ingest::{read_hcp_table, records_from_frame};
//! use hcp_model::PipelineOptions;
//!
//! let df = read_hcp_table(Path::new("hcp_data.csv"))?;
//! let records = records_from_frame(&df, &PipelineOptions::default())?;
//! ```
//!
//! [`HcpRecord`]: hcp_model::HcpRecord
//! [`SchemaError`]: hcp_model::SchemaError

mod error;
mod reader;
mod schema;
mod source;
mod synthetic;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{read_csv_headers, read_hcp_table};

// === Schema Validation ===
pub use schema::{missing_columns, records_from_frame};

// === Data Sources ===
pub use source::DataSource;
pub use synthetic::{SPECIALTIES, STATE_CODES, generate_hcp_data};
