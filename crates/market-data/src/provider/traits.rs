//! Price lookup trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{PriceQuery, PriceQuote};

/// Trait for price per kilogram sources.
///
/// Implement this trait to add a new price source (a saleyard feed, a
/// state indicator service, a local cache).
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use herdfolio_market_data::{MarketDataError, PriceLookup, PriceQuery, PriceQuote};
///
/// struct FixedPrice(rust_decimal::Decimal);
///
/// #[async_trait]
/// impl PriceLookup for FixedPrice {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn lookup(&self, query: &PriceQuery) -> Result<Option<PriceQuote>, MarketDataError> {
///         Ok(Some(PriceQuote::new(self.0, "Fixed", query.as_of.date_naive())))
///     }
/// }
/// ```
#[async_trait]
pub trait PriceLookup: Send + Sync {
    /// Unique identifier for this source.
    ///
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Resolve a price per kilogram for the query.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(quote))` when the source has a price valid at `query.as_of`
    /// - `Ok(None)` when the source has no matching price
    /// - `Err(_)` when the source itself failed
    async fn lookup(&self, query: &PriceQuery) -> Result<Option<PriceQuote>, MarketDataError>;
}
