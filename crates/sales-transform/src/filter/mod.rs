//! Row filters over the required numeric columns.
//!
//! Both filters check for the required columns on their own, so either one
//! can run without the other having run first.

pub mod required;
pub mod validity;

use polars::prelude::DataFrame;

use crate::error::{Result, TransformError};
use crate::types::{REQUIRED_COLUMNS, Stage};

pub use required::{drop_missing_required, presence_mask};
pub use validity::{drop_invalid_rows, drop_invalid_rows_with_policy, non_negative_mask};

/// Fail with [`TransformError::MissingColumn`] unless every required
/// column exists in `df`.
pub fn ensure_required_columns(df: &DataFrame, stage: Stage) -> Result<()> {
    let names = df.get_column_names();
    for required in REQUIRED_COLUMNS {
        if !names.iter().any(|name| name.as_str() == required) {
            return Err(TransformError::MissingColumn {
                column: required.to_string(),
                stage,
            });
        }
    }
    Ok(())
}
