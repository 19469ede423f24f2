//! Core error types for the Herdfolio valuation core.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to these types by whatever repository implementation the
//! host application plugs in.

use chrono::ParseError as ChronoParseError;
use rust_decimal::Decimal;
use thiserror::Error;

use herdfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation core.
///
/// The valuation engine itself never returns these; they surface from the
/// data-entry boundary, the settings layer and repository access.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for repository operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// A query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Internal/unexpected storage error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for data entry and settings parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("Field '{field}' must not be negative, got {value}")]
    Negative { field: String, value: Decimal },

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfigValue(err.to_string())
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}
