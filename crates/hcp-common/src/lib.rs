//! Shared utilities for the HCP targeting crates.
//!
//! Polars cell conversion helpers, column lookup by normalized header name,
//! and the case-insensitive text matching used by the filter layer.

pub mod frame;
pub mod text;

pub use crate::frame::{
    any_to_f64, any_to_string, cell_string, find_column, format_numeric, parse_f64,
};
pub use crate::text::{contains_ignore_case, normalize_header};
