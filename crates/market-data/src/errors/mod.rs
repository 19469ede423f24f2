//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all price lookup operations
//! - [`RetryClass`]: Classification for determining fallthrough behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur during price lookups.
///
/// Each variant is classified into a [`RetryClass`] via the [`retry_class`](Self::retry_class)
/// method, which determines whether a [`PriceLookupChain`](crate::PriceLookupChain)
/// moves on to its next source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// No price exists for the requested key.
    #[error("Price not found: {0}")]
    PriceNotFound(String),

    /// The species string does not map to a known species.
    /// No source can price it, so the chain stops here.
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    /// The price source could not be reached or failed internally.
    #[error("Price source unavailable: {provider} - {message}")]
    ProviderUnavailable {
        /// The lookup that failed
        provider: String,
        /// Description of the failure
        message: String,
    },

    /// The source returned a price that failed validation (negative, malformed).
    #[error("Invalid price from {provider}: {message}")]
    InvalidPrice {
        /// The lookup that returned the price
        provider: String,
        /// Description of the validation failure
        message: String,
    },

    /// Historical price data could not be parsed.
    #[error("Failed to parse price data: {0}")]
    Parse(String),
}

impl MarketDataError {
    /// Returns the retry classification for this error.
    ///
    /// - [`RetryClass::Never`]: Don't consult another source, the request is invalid
    /// - [`RetryClass::NextProvider`]: Try the next source in the chain
    ///
    /// # Examples
    ///
    /// ```
    /// use herdfolio_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::UnknownSpecies("Alpaca".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    ///
    /// let error = MarketDataError::ProviderUnavailable {
    ///     provider: "PRICE_BOOK".to_string(),
    ///     message: "offline".to_string(),
    /// };
    /// assert_eq!(error.retry_class(), RetryClass::NextProvider);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::UnknownSpecies(_) | Self::Parse(_) => RetryClass::Never,

            Self::PriceNotFound(_)
            | Self::ProviderUnavailable { .. }
            | Self::InvalidPrice { .. } => RetryClass::NextProvider,
        }
    }
}

impl From<serde_json::Error> for MarketDataError {
    fn from(err: serde_json::Error) -> Self {
        MarketDataError::Parse(err.to_string())
    }
}
