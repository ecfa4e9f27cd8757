//! Raw CSV header inspection.

use std::path::Path;

use ::csv::ReaderBuilder;

use crate::error::{IngestError, Result};

use super::reader::{ensure_file, validate_encoding};

/// Reads the header row exactly as it appears in the file.
///
/// Only a leading UTF-8 byte order mark is removed; whitespace and casing
/// are preserved so callers can show how each raw name normalizes.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    ensure_file(path)?;
    validate_encoding(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let headers = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            if idx == 0 {
                header.trim_start_matches('\u{feff}').to_string()
            } else {
                header.to_string()
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_headers_verbatim() {
        let file = create_temp_csv(" Order ID ,Product Name,PRICE\n1,Shoes,9.5\n");
        let headers = read_csv_headers(file.path()).unwrap();

        assert_eq!(headers, vec![" Order ID ", "Product Name", "PRICE"]);
    }

    #[test]
    fn test_read_csv_headers_with_bom() {
        let file = create_temp_csv("\u{feff}price,quantity\n1,2\n");
        let headers = read_csv_headers(file.path()).unwrap();

        assert_eq!(headers, vec!["price", "quantity"]);
    }

    #[test]
    fn test_read_csv_headers_quoted() {
        let file = create_temp_csv("\"Unit, Price\",quantity\n1,2\n");
        let headers = read_csv_headers(file.path()).unwrap();

        assert_eq!(headers, vec!["Unit, Price", "quantity"]);
    }

    #[test]
    fn test_read_csv_headers_missing_file() {
        let result = read_csv_headers(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
