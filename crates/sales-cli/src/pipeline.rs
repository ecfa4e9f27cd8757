//! Cleaning run with explicit stages.
//!
//! The run follows these stages in order:
//! 1. **Load**: read the raw CSV
//! 2. **Clean**: normalize columns, trim text, drop incomplete and invalid rows
//! 3. **Write**: persist the cleaned CSV (and optionally the JSON report)
//!
//! Any error aborts the run before the write stage, so no output file is
//! produced for a failed run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use sales_ingest::{read_csv_headers, read_sales_csv};
use sales_output::{write_csv, write_report_json};
use sales_transform::{CleaningReport, Stage, clean, normalize_column_name};

/// Raw input location used when none is given.
pub const DEFAULT_INPUT_PATH: &str = "data/raw/sales_data_raw.csv";

/// Cleaned output location used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "data/processed/sales_data_clean.csv";

/// Options for one cleaning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Where to write the JSON cleaning report, if anywhere.
    pub report: Option<PathBuf>,
    /// Skip every file write.
    pub dry_run: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}

impl CleanOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            report: None,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_report(mut self, report: Option<PathBuf>) -> Self {
        self.report = report;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of a cleaning run.
#[derive(Debug)]
pub struct CleanOutcome {
    pub input: PathBuf,
    /// The cleaned table.
    pub frame: DataFrame,
    pub report: CleaningReport,
    /// Written CSV path; None on a dry run.
    pub output: Option<PathBuf>,
    /// Written report path, if one was requested and written.
    pub report_path: Option<PathBuf>,
}

/// Load, clean and (unless dry-running) write the sales data.
pub fn run_clean(options: &CleanOptions) -> Result<CleanOutcome> {
    let span = info_span!("clean", input = %options.input.display());
    let _guard = span.enter();

    // Stage 1: Load
    let raw = read_sales_csv(&options.input)
        .with_context(|| format!("load {}", options.input.display()))?;

    // Stage 2: Clean
    let (frame, mut report) =
        clean(raw).with_context(|| format!("clean {}", options.input.display()))?;

    // Stage 3: Write
    if options.dry_run {
        info!(rows = frame.height(), "dry run, skipping write");
        return Ok(CleanOutcome {
            input: options.input.clone(),
            frame,
            report,
            output: None,
            report_path: None,
        });
    }

    let output = write_csv(&frame, &options.output)
        .with_context(|| format!("write {}", options.output.display()))?;
    report.record(Stage::Write, frame.height(), frame.height());

    let report_path = match &options.report {
        Some(path) => Some(
            write_report_json(&report, path)
                .with_context(|| format!("write report {}", path.display()))?,
        ),
        None => None,
    };

    Ok(CleanOutcome {
        input: options.input.clone(),
        frame,
        report,
        output: Some(output),
        report_path,
    })
}

/// How one raw header normalizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub raw: String,
    pub normalized: String,
    /// Another raw header normalizes to the same identifier.
    pub collides: bool,
}

/// Read the raw header row and pair each name with its normalized form.
pub fn inspect_columns(input: &Path) -> Result<Vec<ColumnMapping>> {
    let headers =
        read_csv_headers(input).with_context(|| format!("read headers {}", input.display()))?;
    let normalized: Vec<String> = headers
        .iter()
        .map(|raw| normalize_column_name(raw))
        .collect();

    Ok(headers
        .iter()
        .zip(&normalized)
        .map(|(raw, name)| ColumnMapping {
            raw: raw.clone(),
            normalized: name.clone(),
            collides: normalized.iter().filter(|other| *other == name).count() > 1,
        })
        .collect())
}
