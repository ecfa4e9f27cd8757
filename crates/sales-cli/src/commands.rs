use anyhow::{Result, bail};
use tracing::info;

use sales_cli::pipeline::{CleanOptions, CleanOutcome, inspect_columns, run_clean};
use sales_cli::summary::render_columns;

use crate::cli::{CleanArgs, ColumnsArgs};

pub fn run_clean_command(args: &CleanArgs) -> Result<CleanOutcome> {
    let options = CleanOptions::new(&args.input, &args.output)
        .with_report(args.report.clone())
        .with_dry_run(args.dry_run);
    let outcome = run_clean(&options)?;
    info!(
        rows_in = outcome.report.input_rows(),
        rows_out = outcome.report.output_rows(),
        "cleaning finished"
    );
    Ok(outcome)
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let mappings = inspect_columns(&args.input)?;
    println!("{}", render_columns(&mappings));
    let duplicates: Vec<&str> = mappings
        .iter()
        .filter(|mapping| mapping.collides)
        .map(|mapping| mapping.raw.as_str())
        .collect();
    if !duplicates.is_empty() {
        bail!("headers {duplicates:?} collide after normalization");
    }
    Ok(())
}
