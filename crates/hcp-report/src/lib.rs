//! HCP report generation library.
//!
//! This crate provides the output side of the targeting pipeline:
//!
//! - **Export**: CSV (spreadsheet-compatible) and JSON files for the ranked,
//!   channel-affinity, and source tables
//! - **Distributions**: tier, specialty, state, and channel counts for charts

mod common;
mod distribution;
mod error;
mod export;

pub use distribution::{
    Bucket, Distribution, channel_distribution, segment_distribution, specialty_distribution,
    state_distribution,
};
pub use error::{ExportError, Result};
pub use export::{ExportFormat, export_affinity, export_ranked, export_source, write_frame_csv};
