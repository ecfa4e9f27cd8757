//! Error types for the cleaning stages.

use thiserror::Error;

use crate::types::Stage;

/// Errors that abort a cleaning run.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A required column is absent, usually because the header did not
    /// normalize to the expected identifier.
    #[error(
        "expected column '{column}' not found during {stage}; check the raw CSV headers and the column normalization step"
    )]
    MissingColumn { column: String, stage: Stage },

    /// Two or more raw headers normalize to the same identifier.
    #[error("columns {sources:?} all normalize to '{column}'")]
    DuplicateColumn { column: String, sources: Vec<String> },

    /// A required text column holds a value that is not a number.
    #[error("column '{column}' row {row}: '{value}' is not a number")]
    NonNumericValue {
        column: String,
        row: usize,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, TransformError>;
