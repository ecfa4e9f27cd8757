//! Whitespace trimming for text columns.

use std::borrow::Cow;

use polars::prelude::{ChunkApply, Column, DataFrame, DataType, IntoColumn};
use tracing::debug;

use crate::error::Result;

/// Names of the columns stored as text, in table order.
pub fn text_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String)
        .map(|column| column.name().to_string())
        .collect()
}

/// Return a copy of `df` with leading and trailing whitespace stripped from
/// every value of every text column.
///
/// Numeric columns and nulls pass through unchanged. A value made only of
/// whitespace becomes an empty string, not null.
pub fn trim_text_columns(df: &DataFrame) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        columns.push(trim_column(column)?);
    }
    Ok(DataFrame::new(columns)?)
}

fn trim_column(column: &Column) -> Result<Column> {
    if column.dtype() != &DataType::String {
        return Ok(column.clone());
    }
    let ca = column.str()?;
    let changed = ca
        .into_iter()
        .flatten()
        .filter(|value| value.trim().len() != value.len())
        .count();
    if changed == 0 {
        return Ok(column.clone());
    }
    debug!(column = %column.name(), changed, "trimmed text values");
    let trimmed = ca.apply_values(|value| Cow::Borrowed(value.trim()));
    Ok(trimmed.into_column())
}
