//! CLI library components for the HCP targeting tool.

pub mod logging;
pub mod pipeline;
pub mod types;
