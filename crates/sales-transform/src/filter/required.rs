//! Drop rows that lack a required value.

use polars::prelude::{BooleanChunked, Column, DataFrame, DataType};
use tracing::debug;

use crate::error::Result;
use crate::filter::ensure_required_columns;
use crate::types::{PRICE_COLUMN, QUANTITY_COLUMN, Stage};

/// Mask that is true where the column holds a value.
///
/// Nulls are missing in every column. In floating-point columns a NaN is
/// missing as well.
pub fn presence_mask(column: &Column) -> Result<BooleanChunked> {
    let series = column.as_materialized_series();
    match series.dtype() {
        DataType::Float32 | DataType::Float64 => {
            let values = series.cast(&DataType::Float64)?;
            Ok(values
                .f64()?
                .into_iter()
                .map(|value| value.is_some_and(|v| !v.is_nan()))
                .collect())
        }
        _ => Ok(series.is_not_null()),
    }
}

/// Return the rows of `df` where both `price` and `quantity` are present.
///
/// Fails with [`TransformError::MissingColumn`](crate::TransformError::MissingColumn)
/// before looking at any row if either column is absent. Row order is
/// preserved.
pub fn drop_missing_required(df: &DataFrame) -> Result<DataFrame> {
    ensure_required_columns(df, Stage::DropMissing)?;

    let price = presence_mask(df.column(PRICE_COLUMN)?)?;
    let quantity = presence_mask(df.column(QUANTITY_COLUMN)?)?;
    let keep = &price & &quantity;

    let out = df.filter(&keep)?;
    debug!(
        rows_in = df.height(),
        rows_out = out.height(),
        "dropped rows with missing price or quantity"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn sales(price: &[Option<f64>], quantity: &[Option<i64>]) -> DataFrame {
        DataFrame::new(vec![
            Series::new("price".into(), price).into_column(),
            Series::new("quantity".into(), quantity).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn test_drops_row_with_missing_quantity() {
        let df = sales(&[Some(10.0), Some(4.5)], &[None, Some(2)]);

        let out = drop_missing_required(&df).unwrap();

        assert_eq!(out.height(), 1);
        let price = out.column("price").unwrap().f64().unwrap().get(0);
        assert_eq!(price, Some(4.5));
    }

    #[test]
    fn test_drops_row_with_missing_price() {
        let df = sales(&[None, Some(1.0), Some(2.0)], &[Some(1), Some(2), Some(3)]);

        let out = drop_missing_required(&df).unwrap();

        let quantities: Vec<Option<i64>> =
            out.column("quantity").unwrap().i64().unwrap().into_iter().collect();
        assert_eq!(quantities, vec![Some(2), Some(3)]);
    }

    #[test]
    fn test_nan_counts_as_missing() {
        let df = sales(&[Some(f64::NAN), Some(1.0)], &[Some(1), Some(1)]);

        let out = drop_missing_required(&df).unwrap();
        assert_eq!(out.height(), 1);
    }

    #[test]
    fn test_negative_values_pass_through() {
        let df = sales(&[Some(-5.0)], &[Some(-1)]);

        let out = drop_missing_required(&df).unwrap();
        assert_eq!(out.height(), 1);
    }

    #[test]
    fn test_text_columns_use_null_as_missing() {
        let df = DataFrame::new(vec![
            Series::new("price".into(), &[Some("9.99"), None]).into_column(),
            Series::new("quantity".into(), &[Some(1i64), Some(2)]).into_column(),
        ])
        .unwrap();

        let out = drop_missing_required(&df).unwrap();
        assert_eq!(out.height(), 1);
    }

    #[test]
    fn test_missing_quantity_column() {
        let df = DataFrame::new(vec![Series::new("price".into(), &[1.0]).into_column()]).unwrap();

        let err = drop_missing_required(&df).unwrap_err();
        assert!(matches!(
            err,
            TransformError::MissingColumn { ref column, stage: Stage::DropMissing } if column == "quantity"
        ));
    }

    #[test]
    fn test_empty_table() {
        let df = sales(&[], &[]);
        let out = drop_missing_required(&df).unwrap();
        assert_eq!(out.height(), 0);
        assert_eq!(out.width(), 2);
    }
}
