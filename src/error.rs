//! Error types for date parsing and calendar operations.

use thiserror::Error;

/// Errors raised by the date utilities.
#[derive(Debug, Error)]
pub enum DateError {
    /// Date text that matches none of the recognized layouts, or that
    /// matches a layout but holds unparseable fields.
    #[error("invalid date string: {0}")]
    InvalidInput(String),

    /// An out-of-range or unrecognized enumerated parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, DateError>;
