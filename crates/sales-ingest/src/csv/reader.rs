//! Raw sales CSV loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, NullValues, SerReader};

use crate::error::{IngestError, Result};

use super::header::read_csv_headers;

/// Field values loaded as null in every column, besides the empty field.
pub const NULL_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Fail with [`IngestError::FileNotFound`] unless `path` is an existing file.
pub(crate) fn ensure_file(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;
    if !metadata.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported. An empty file
/// is rejected here as well so that the parser never sees it.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    if bytes_read >= 2 {
        // UTF-16 LE BOM
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads the raw sales CSV into a Polars DataFrame.
///
/// The first line is used as the header and kept verbatim (no trimming or
/// case folding). A header row that repeats a name exactly fails with
/// [`IngestError::DuplicateHeader`]. The whole file is scanned for type
/// inference, so a column only loads as numeric if every non-missing value
/// in it parses as a number. Empty fields and the [`NULL_TOKENS`] load as
/// null.
///
/// Structural problems such as inconsistent row widths are reported as
/// [`IngestError::CsvParse`] and are not repaired.
pub fn read_sales_csv(path: &Path) -> Result<DataFrame> {
    let headers = read_csv_headers(path)?;
    if let Some(header) = repeated_header(&headers) {
        return Err(IngestError::DuplicateHeader {
            path: path.to_path_buf(),
            header,
        });
    }

    let null_values = NullValues::AllColumns(NULL_TOKENS.iter().map(|&t| t.into()).collect());
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|options| options.with_null_values(Some(null_values.clone())))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded raw sales data"
    );

    Ok(df)
}

/// First header name that appears more than once, compared verbatim.
fn repeated_header(headers: &[String]) -> Option<String> {
    headers
        .iter()
        .enumerate()
        .find(|(idx, header)| headers[..*idx].contains(*header))
        .map(|(_, header)| header.clone())
}
