//! Sales data ingestion.
//!
//! Loads the raw sales export into a Polars [`DataFrame`](polars::prelude::DataFrame).
//! The first line of the file is the header; every following line is a
//! record. Column types come from the CSV reader's own inference, so
//! numeric-looking columns load as numbers and everything else as text.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sales_ingest::{read_csv_headers, read_sales_csv};
//!
//! let path = Path::new("data/raw/sales_data_raw.csv");
//! let headers = read_csv_headers(path)?;
//! let df = read_sales_csv(path)?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use crate::csv::{NULL_TOKENS, read_csv_headers, read_sales_csv, validate_encoding};
