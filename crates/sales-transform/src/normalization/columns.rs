//! Column identifier normalization.
//!
//! Raw exports carry headers like `" Unit Price "` or `"QUANTITY"`. Every
//! identifier is canonicalized as trim, then lowercase, then each space
//! replaced by an underscore, so downstream stages can refer to columns by
//! a fixed name.

use std::collections::BTreeMap;

use polars::prelude::{Column, DataFrame};
use tracing::debug;

use crate::error::{Result, TransformError};

/// Canonicalize a single column identifier.
///
/// # Examples
///
/// ```
/// use sales_transform::normalize_column_name;
///
/// assert_eq!(normalize_column_name(" Price "), "price");
/// assert_eq!(normalize_column_name("Unit Price"), "unit_price");
/// assert_eq!(normalize_column_name("order_id"), "order_id");
/// ```
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Find the first normalized identifier produced by more than one raw name.
///
/// Returns the identifier and the raw names that collapse onto it, in
/// table order.
pub fn find_duplicate_column<S: AsRef<str>>(raw_names: &[S]) -> Option<(String, Vec<String>)> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut order = Vec::new();
    for raw in raw_names {
        let raw = raw.as_ref();
        let normalized = normalize_column_name(raw);
        let sources = groups.entry(normalized.clone()).or_default();
        if sources.is_empty() {
            order.push(normalized);
        }
        sources.push(raw.to_string());
    }
    order.into_iter().find_map(|name| {
        let sources = groups.remove(&name)?;
        (sources.len() > 1).then_some((name, sources))
    })
}

/// Return a copy of `df` with every column identifier normalized.
///
/// Values are untouched. Fails with [`TransformError::DuplicateColumn`] if
/// two raw identifiers collapse to the same normalized one, instead of
/// letting one column shadow the other.
pub fn normalize_columns(df: &DataFrame) -> Result<DataFrame> {
    let raw_names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    if let Some((column, sources)) = find_duplicate_column(&raw_names) {
        return Err(TransformError::DuplicateColumn { column, sources });
    }

    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .zip(&raw_names)
        .map(|(column, raw)| {
            let normalized = normalize_column_name(raw);
            if normalized != *raw {
                debug!(from = %raw, to = %normalized, "renamed column");
            }
            column.clone().with_name(normalized.as_str().into())
        })
        .collect();

    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name(" Price "), "price");
        assert_eq!(normalize_column_name("Product Name"), "product_name");
        assert_eq!(normalize_column_name("  Order  Date\t"), "order__date");
        assert_eq!(normalize_column_name("QUANTITY"), "quantity");
        assert_eq!(normalize_column_name(""), "");
    }

    #[test]
    fn test_normalize_column_name_keeps_interior_tabs() {
        // Only the space character is replaced.
        assert_eq!(normalize_column_name("a\tb"), "a\tb");
    }

    #[test]
    fn test_normalize_columns_renames_and_keeps_values() {
        let df = DataFrame::new(vec![
            Series::new(" Price ".into(), &[1.5, 2.0]).into_column(),
            Series::new("Product Name".into(), &["Shoes", "Hat"]).into_column(),
        ])
        .unwrap();

        let out = normalize_columns(&df).unwrap();

        assert_eq!(column_names(&out), vec!["price", "product_name"]);
        assert_eq!(out.height(), 2);
        assert!(
            out.column("price")
                .unwrap()
                .as_materialized_series()
                .equals(&Series::new("price".into(), &[1.5, 2.0]))
        );
        // Input is left untouched.
        assert_eq!(column_names(&df), vec![" Price ", "Product Name"]);
    }

    #[test]
    fn test_normalize_columns_rejects_collisions() {
        let df = DataFrame::new(vec![
            Series::new("Unit Price".into(), &[1.0]).into_column(),
            Series::new("unit_price".into(), &[2.0]).into_column(),
        ])
        .unwrap();

        let err = normalize_columns(&df).unwrap_err();
        match err {
            TransformError::DuplicateColumn { column, sources } => {
                assert_eq!(column, "unit_price");
                assert_eq!(sources, vec!["Unit Price", "unit_price"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_find_duplicate_column_reports_first_in_table_order() {
        let names = ["B", "a", "b ", "A"];
        let (column, sources) = find_duplicate_column(&names).unwrap();
        assert_eq!(column, "b");
        assert_eq!(sources, vec!["B", "b "]);

        assert!(find_duplicate_column(&["price", "quantity"]).is_none());
    }
}
