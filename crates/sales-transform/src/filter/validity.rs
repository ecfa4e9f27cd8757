//! Drop rows whose required values are negative.
//!
//! Negative prices and quantities are treated as data-entry errors. There
//! is no exception for returns or refunds.

use polars::prelude::{BooleanChunked, Column, DataFrame, DataType};
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::filter::ensure_required_columns;
use crate::normalization::parse_numeric;
use crate::types::{MissingValuePolicy, PRICE_COLUMN, QUANTITY_COLUMN, Stage};

/// Read a required column as optional `f64` values.
///
/// Numeric columns are cast to `Float64`. A text column is parsed value by
/// value; an empty or whitespace-only string counts as missing, and any
/// other value that is not a number fails the run.
fn numeric_values(column: &Column) -> Result<Vec<Option<f64>>> {
    let series = column.as_materialized_series();
    if series.dtype() == &DataType::String {
        return series
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, value)| match value {
                None => Ok(None),
                Some(text) if text.trim().is_empty() => Ok(None),
                Some(text) => parse_numeric(text).map(Some).ok_or_else(|| {
                    TransformError::NonNumericValue {
                        column: column.name().to_string(),
                        row,
                        value: text.to_string(),
                    }
                }),
            })
            .collect();
    }
    let values = series.cast(&DataType::Float64)?;
    Ok(values.f64()?.into_iter().collect())
}

/// Mask that is true where the column value is zero or greater.
///
/// Missing values are judged by `policy`. NaN never passes.
pub fn non_negative_mask(column: &Column, policy: MissingValuePolicy) -> Result<BooleanChunked> {
    let values = numeric_values(column)?;
    Ok(values
        .into_iter()
        .map(|value| match value {
            Some(v) => v >= 0.0,
            None => match policy {
                MissingValuePolicy::Exclude => false,
            },
        })
        .collect())
}

/// Return the rows of `df` where `price >= 0` and `quantity >= 0`, using the
/// default [`MissingValuePolicy`].
pub fn drop_invalid_rows(df: &DataFrame) -> Result<DataFrame> {
    drop_invalid_rows_with_policy(df, MissingValuePolicy::default())
}

/// Return the rows of `df` where `price >= 0` and `quantity >= 0`.
///
/// The required columns are checked here as well, so this filter does not
/// depend on the missing-value filter having run first. Row order is
/// preserved.
pub fn drop_invalid_rows_with_policy(
    df: &DataFrame,
    policy: MissingValuePolicy,
) -> Result<DataFrame> {
    ensure_required_columns(df, Stage::DropInvalid)?;

    let price = non_negative_mask(df.column(PRICE_COLUMN)?, policy)?;
    let quantity = non_negative_mask(df.column(QUANTITY_COLUMN)?, policy)?;
    let keep = &price & &quantity;

    let out = df.filter(&keep)?;
    debug!(
        rows_in = df.height(),
        rows_out = out.height(),
        ?policy,
        "dropped rows with negative price or quantity"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn sales(price: &[Option<f64>], quantity: &[Option<i64>]) -> DataFrame {
        DataFrame::new(vec![
            Series::new("price".into(), price).into_column(),
            Series::new("quantity".into(), quantity).into_column(),
        ])
        .unwrap()
    }

    fn prices(df: &DataFrame) -> Vec<Option<f64>> {
        df.column("price").unwrap().f64().unwrap().into_iter().collect()
    }

    #[test]
    fn test_drops_negative_price() {
        let df = sales(&[Some(-5.0), Some(3.0)], &[Some(3), Some(1)]);

        let out = drop_invalid_rows(&df).unwrap();

        assert_eq!(prices(&out), vec![Some(3.0)]);
    }

    #[test]
    fn test_drops_negative_quantity() {
        let df = sales(&[Some(2.0), Some(3.0)], &[Some(-1), Some(1)]);

        let out = drop_invalid_rows(&df).unwrap();

        assert_eq!(prices(&out), vec![Some(3.0)]);
    }

    #[test]
    fn test_zero_is_valid() {
        let df = sales(&[Some(0.0)], &[Some(0)]);
        assert_eq!(drop_invalid_rows(&df).unwrap().height(), 1);
    }

    #[test]
    fn test_missing_values_are_excluded() {
        let df = sales(&[None, Some(1.0), Some(f64::NAN)], &[Some(1), None, Some(1)]);

        let out = drop_invalid_rows(&df).unwrap();
        assert_eq!(out.height(), 0);
    }

    #[test]
    fn test_preserves_row_order() {
        let df = sales(
            &[Some(4.0), Some(-1.0), Some(2.0), Some(1.0)],
            &[Some(1), Some(1), Some(1), Some(1)],
        );

        let out = drop_invalid_rows(&df).unwrap();
        assert_eq!(prices(&out), vec![Some(4.0), Some(2.0), Some(1.0)]);
    }

    #[test]
    fn test_text_price_is_parsed_for_comparison() {
        let df = DataFrame::new(vec![
            Series::new("price".into(), &[Some("9.99"), Some(" -2 "), Some(""), None])
                .into_column(),
            Series::new("quantity".into(), &[1i64, 1, 1, 1]).into_column(),
        ])
        .unwrap();

        let out = drop_invalid_rows(&df).unwrap();

        assert_eq!(out.height(), 1);
        // Values are compared, not converted.
        assert_eq!(out.column("price").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_non_numeric_text_fails() {
        let df = DataFrame::new(vec![
            Series::new("price".into(), &["1.0", "ten"]).into_column(),
            Series::new("quantity".into(), &[1i64, 1]).into_column(),
        ])
        .unwrap();

        let err = drop_invalid_rows(&df).unwrap_err();
        match err {
            TransformError::NonNumericValue { column, row, value } => {
                assert_eq!(column, "price");
                assert_eq!(row, 1);
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_price_column() {
        let df = DataFrame::new(vec![Series::new("quantity".into(), &[1i64]).into_column()])
            .unwrap();

        let err = drop_invalid_rows(&df).unwrap_err();
        assert!(matches!(
            err,
            TransformError::MissingColumn { ref column, stage: Stage::DropInvalid } if column == "price"
        ));
    }
}
