//! CSV reading utilities.

mod header;
mod reader;

pub use header::read_csv_headers;
pub use reader::{NULL_TOKENS, read_sales_csv, validate_encoding};
