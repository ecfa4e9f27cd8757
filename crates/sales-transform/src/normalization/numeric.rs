//! Numeric parsing for required columns that loaded as text.
//!
//! Only plain decimal and scientific notation are accepted. Thousands
//! separators and locale-specific decimal marks are not.

/// Parse a text value as `f64`, ignoring surrounding whitespace.
///
/// Returns None for empty or non-numeric input. `NaN` and `inf` spellings
/// are accepted the way [`str::parse`] accepts them.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
