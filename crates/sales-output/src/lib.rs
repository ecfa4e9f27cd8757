//! Output generation for the sales cleaning pipeline.
//!
//! Writes the cleaned table as a CSV file with a header row and, on
//! request, the cleaning report as JSON. Missing parent directories are
//! created. Files are written to a temporary sibling and renamed into
//! place, so a failed write never leaves a truncated destination file.

mod common;
mod csv;
mod error;
mod report;

pub use common::ensure_parent_dir;
pub use csv::write_csv;
pub use error::{OutputError, Result};
pub use report::write_report_json;
