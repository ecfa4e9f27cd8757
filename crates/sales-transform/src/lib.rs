//! Sales record cleaning stages.
//!
//! Every stage is a pure function from `&DataFrame` to a new `DataFrame`;
//! no stage mutates the table it is given.
//!
//! # Overview
//!
//! - **Column normalization**: trim, lowercase, spaces to underscores, with
//!   duplicate detection
//! - **Text trimming**: strip surrounding whitespace from text columns
//! - **Required-value filter**: drop rows missing `price` or `quantity`
//! - **Validity filter**: drop rows where `price` or `quantity` is negative
//! - **Staged pipeline**: the four stages chained in a fixed, typed order
//!
//! # Example
//!
//! ```ignore
//! use sales_transform::{StagedFrame, clean};
//!
//! let (cleaned, report) = clean(raw_df)?;
//!
//! // or stage by stage
//! let validated = StagedFrame::raw(raw_df)
//!     .normalize_columns()?
//!     .trim_text()?
//!     .drop_missing()?
//!     .drop_invalid()?;
//! let (cleaned, report) = validated.finish();
//! ```

mod error;
mod types;

pub mod filter;
pub mod normalization;
pub mod pipeline;

// Core types
pub use types::{
    CleaningReport, MissingValuePolicy, PRICE_COLUMN, QUANTITY_COLUMN, REQUIRED_COLUMNS, Stage,
    StageRecord,
};

// Error type
pub use error::{Result, TransformError};

// Stages
pub use filter::{
    drop_invalid_rows, drop_invalid_rows_with_policy, drop_missing_required,
    ensure_required_columns,
};
pub use normalization::{
    find_duplicate_column, normalize_column_name, normalize_columns, text_columns,
    trim_text_columns,
};

// Pipeline
pub use pipeline::{StagedFrame, clean};
