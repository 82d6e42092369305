use thiserror::Error;

/// Schema violations found while converting a source table into records.
///
/// Rows are 1-based data-row numbers (the header is not counted).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    #[error("column '{column}' is empty in row {row}")]
    MissingValue { column: String, row: usize },

    #[error("column '{column}' has non-numeric value '{value}' in row {row}")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    #[error("column '{column}' has negative value {value} in row {row}")]
    NegativeValue {
        column: String,
        row: usize,
        value: f64,
    },

    #[error("unknown writing_behavior '{value}' in row {row} (expected High, Medium, or Low)")]
    UnknownBehavior { row: usize, value: String },
}

impl SchemaError {
    /// The column the violation was found in.
    pub fn column(&self) -> &str {
        match self {
            SchemaError::MissingColumn { column }
            | SchemaError::MissingValue { column, .. }
            | SchemaError::InvalidNumber { column, .. }
            | SchemaError::NegativeValue { column, .. } => column,
            SchemaError::UnknownBehavior { .. } => crate::columns::WRITING_BEHAVIOR,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
