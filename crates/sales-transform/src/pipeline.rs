//! Cleaning pipeline with compiler-checked stage ordering.
//!
//! The stages run in this order:
//! 1. **Normalize columns**: canonical identifiers, duplicates rejected
//! 2. **Trim text**: strip surrounding whitespace from text values
//! 3. **Drop missing**: remove rows lacking `price` or `quantity`
//! 4. **Drop invalid**: remove rows with a negative `price` or `quantity`
//!
//! A [`StagedFrame`] carries the table together with a marker for the last
//! stage it went through. Each transition is only defined on the marker of
//! the preceding stage, so the filters can never be reached before the
//! columns are normalized.

use std::marker::PhantomData;
use std::time::{Duration, Instant};

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use crate::error::Result;
use crate::filter::{drop_invalid_rows, drop_missing_required};
use crate::normalization::{normalize_columns, trim_text_columns};
use crate::types::{CleaningReport, Stage};

/// Table as loaded, headers not yet normalized.
#[derive(Debug)]
pub enum Raw {}

/// Column identifiers normalized.
#[derive(Debug)]
pub enum Normalized {}

/// Text values trimmed.
#[derive(Debug)]
pub enum Trimmed {}

/// Rows with missing required values removed.
#[derive(Debug)]
pub enum Complete {}

/// Rows with negative required values removed.
#[derive(Debug)]
pub enum Validated {}

/// A table tagged with the last cleaning stage it completed.
#[derive(Debug)]
pub struct StagedFrame<S> {
    frame: DataFrame,
    report: CleaningReport,
    _stage: PhantomData<S>,
}

impl<S> StagedFrame<S> {
    /// The table in its current state.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Stages completed so far.
    pub fn report(&self) -> &CleaningReport {
        &self.report
    }

    fn advance<T>(
        self,
        stage: Stage,
        apply: impl FnOnce(&DataFrame) -> Result<DataFrame>,
    ) -> Result<StagedFrame<T>> {
        let start = Instant::now();
        let rows_in = self.frame.height();
        let frame = info_span!("stage", stage = %stage).in_scope(|| apply(&self.frame))?;
        let rows_out = frame.height();
        info!(
            stage = %stage,
            rows_in,
            rows_out,
            dropped = rows_in.saturating_sub(rows_out),
            elapsed_ms = whole_millis(start.elapsed()),
            "stage complete"
        );

        let mut report = self.report;
        report.record(stage, rows_in, rows_out);
        Ok(StagedFrame {
            frame,
            report,
            _stage: PhantomData,
        })
    }
}

impl StagedFrame<Raw> {
    /// Wrap a freshly loaded table. Records the [`Stage::Load`] row count.
    pub fn raw(frame: DataFrame) -> Self {
        let rows = frame.height();
        let mut report = CleaningReport::default();
        report.record(Stage::Load, rows, rows);
        Self {
            frame,
            report,
            _stage: PhantomData,
        }
    }

    /// Canonicalize every column identifier.
    pub fn normalize_columns(self) -> Result<StagedFrame<Normalized>> {
        self.advance(Stage::NormalizeColumns, normalize_columns)
    }
}

impl StagedFrame<Normalized> {
    /// Strip surrounding whitespace from every text value.
    pub fn trim_text(self) -> Result<StagedFrame<Trimmed>> {
        self.advance(Stage::TrimText, trim_text_columns)
    }
}

impl StagedFrame<Trimmed> {
    /// Remove rows missing `price` or `quantity`.
    pub fn drop_missing(self) -> Result<StagedFrame<Complete>> {
        self.advance(Stage::DropMissing, drop_missing_required)
    }
}

impl StagedFrame<Complete> {
    /// Remove rows with a negative `price` or `quantity`.
    pub fn drop_invalid(self) -> Result<StagedFrame<Validated>> {
        self.advance(Stage::DropInvalid, drop_invalid_rows)
    }
}

impl StagedFrame<Validated> {
    /// Release the cleaned table and the report of the run.
    pub fn finish(self) -> (DataFrame, CleaningReport) {
        let mut report = self.report;
        report.columns = self
            .frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        (self.frame, report)
    }
}

/// Milliseconds in `elapsed`, saturating at `u64::MAX`.
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Run every cleaning stage over a loaded table.
pub fn clean(frame: DataFrame) -> Result<(DataFrame, CleaningReport)> {
    let cleaned = StagedFrame::raw(frame)
        .normalize_columns()?
        .trim_text()?
        .drop_missing()?
        .drop_invalid()?;
    Ok(cleaned.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn test_clean_records_every_stage() {
        let df = DataFrame::new(vec![
            Series::new(" Price ".into(), &[Some(10.0), Some(-1.0), None]).into_column(),
            Series::new("Quantity".into(), &[Some(1i64), Some(1), Some(1)]).into_column(),
        ])
        .unwrap();

        let (out, report) = clean(df).unwrap();

        assert_eq!(out.height(), 1);
        let stages: Vec<Stage> = report.stages.iter().map(|record| record.stage).collect();
        assert_eq!(
            stages,
            vec![
                Stage::Load,
                Stage::NormalizeColumns,
                Stage::TrimText,
                Stage::DropMissing,
                Stage::DropInvalid,
            ]
        );
        assert_eq!(report.input_rows(), 3);
        assert_eq!(report.output_rows(), 1);
        assert_eq!(report.columns, vec!["price", "quantity"]);
    }

    #[test]
    fn test_whole_millis_saturates() {
        assert_eq!(whole_millis(Duration::from_micros(2_500)), 2);
        assert_eq!(whole_millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_stage_error_stops_the_run() {
        let df = DataFrame::new(vec![
            Series::new("Price".into(), &[1.0]).into_column(),
            Series::new("Qty".into(), &[1i64]).into_column(),
        ])
        .unwrap();

        let trimmed = StagedFrame::raw(df)
            .normalize_columns()
            .unwrap()
            .trim_text()
            .unwrap();
        assert_eq!(trimmed.report().stages.len(), 3);

        let err = trimmed.drop_missing().unwrap_err();
        assert!(matches!(err, TransformError::MissingColumn { ref column, .. } if column == "quantity"));
    }
}
