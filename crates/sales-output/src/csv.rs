//! Cleaned table CSV writer.

use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use crate::common::write_atomic;
use crate::error::{OutputError, Result};

/// Write `df` to `path` as CSV with a header row.
///
/// Parent directories are created as needed. Nulls are written as empty
/// fields.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<PathBuf> {
    let mut frame = df.clone();
    write_atomic(path, |file, temp_path| {
        CsvWriter::new(file)
            .include_header(true)
            .finish(&mut frame)
            .map_err(|e| OutputError::CsvWrite {
                path: temp_path.to_path_buf(),
                message: e.to_string(),
            })
    })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote cleaned CSV"
    );
    Ok(path.to_path_buf())
}
