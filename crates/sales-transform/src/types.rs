//! Core types shared by the cleaning stages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column holding the unit price of a sale.
pub const PRICE_COLUMN: &str = "price";

/// Column holding the number of units sold.
pub const QUANTITY_COLUMN: &str = "quantity";

/// Columns that must exist after column normalization and hold a
/// non-missing, non-negative number in every kept row.
pub const REQUIRED_COLUMNS: [&str; 2] = [PRICE_COLUMN, QUANTITY_COLUMN];

/// A step of the cleaning run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Read the raw CSV file.
    Load,
    /// Canonicalize column identifiers.
    NormalizeColumns,
    /// Strip surrounding whitespace from text values.
    TrimText,
    /// Drop rows missing a required value.
    DropMissing,
    /// Drop rows with a negative required value.
    DropInvalid,
    /// Persist the cleaned table.
    Write,
}

impl Stage {
    /// Stable name used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Load => "load",
            Stage::NormalizeColumns => "normalize_columns",
            Stage::TrimText => "trim_text",
            Stage::DropMissing => "drop_missing",
            Stage::DropInvalid => "drop_invalid",
            Stage::Write => "write",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a missing value is judged by the non-negative check.
///
/// Missing values cannot be compared against zero, so the validity filter
/// needs an explicit rule instead of relying on comparison semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValuePolicy {
    /// A missing value fails the check and its row is dropped.
    #[default]
    Exclude,
}

/// Row counts observed around one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    pub stage: Stage,
    pub rows_in: usize,
    pub rows_out: usize,
}

impl StageRecord {
    /// Rows removed by the stage.
    pub fn dropped(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }
}

/// Summary of a cleaning run, one record per executed stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub stages: Vec<StageRecord>,
    /// Column identifiers of the final table, in table order.
    pub columns: Vec<String>,
}

impl CleaningReport {
    /// Record a finished stage.
    pub fn record(&mut self, stage: Stage, rows_in: usize, rows_out: usize) {
        self.stages.push(StageRecord {
            stage,
            rows_in,
            rows_out,
        });
    }

    /// Look up the record for a stage, if it ran.
    pub fn stage(&self, stage: Stage) -> Option<&StageRecord> {
        self.stages.iter().find(|record| record.stage == stage)
    }

    /// Rows present when the first recorded stage started.
    pub fn input_rows(&self) -> usize {
        self.stages.first().map_or(0, |record| record.rows_in)
    }

    /// Rows present after the last recorded stage.
    pub fn output_rows(&self) -> usize {
        self.stages.last().map_or(0, |record| record.rows_out)
    }

    /// Total rows removed across all stages.
    pub fn dropped_rows(&self) -> usize {
        self.stages.iter().map(StageRecord::dropped).sum()
    }
}
