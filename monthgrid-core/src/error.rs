//! Error types for monthgrid.

use thiserror::Error;

/// Errors that can occur while parsing input for, or configuring, a month view.
///
/// Resolving events never fails. Building a grid fails only for months whose
/// padded weeks would leave chrono's date range; everything else comes from
/// parsing caller-supplied text and files.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid timestamp '{0}'. Expected YYYY-MM-DDTHH:MM[:SS]")]
    InvalidTimestamp(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid week start {0}. Expected 0 (Sunday) or 1 (Monday)")]
    InvalidWeekStart(String),

    #[error("Month grid for {0} extends past the supported date range")]
    DateOutOfRange(String),

    #[error("Invalid date format pattern '{0}'")]
    InvalidFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for monthgrid operations.
pub type GridResult<T> = Result<T, GridError>;
