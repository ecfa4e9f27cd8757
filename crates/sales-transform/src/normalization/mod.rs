//! Value and identifier normalization stages.

pub mod columns;
pub mod numeric;
pub mod text;

pub use columns::{find_duplicate_column, normalize_column_name, normalize_columns};
pub use numeric::parse_numeric;
pub use text::{text_columns, trim_text_columns};
