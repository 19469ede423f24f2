//! Lookup chain - composite price source that tries sources in order.
//!
//! The chain stops at the first source that returns a price. A source
//! returning `Ok(None)` has no price for the query and the next source is
//! tried. Errors classified [`RetryClass::NextProvider`] are logged and the
//! next source is tried; [`RetryClass::Never`] errors end the chain.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::errors::{MarketDataError, RetryClass};
use crate::models::{PriceQuery, PriceQuote};

use super::traits::PriceLookup;

const PROVIDER_ID: &str = "CHAIN";

/// Composite price source.
///
/// # Example
///
/// ```ignore
/// let chain = PriceLookupChain::new()
///     .with_lookup(Arc::new(price_book))
///     .with_lookup(Arc::new(BenchmarkPriceLookup::default()));
///
/// let quote = chain.lookup(&query).await?;
/// ```
#[derive(Default)]
pub struct PriceLookupChain {
    lookups: Vec<Arc<dyn PriceLookup>>,
}

impl PriceLookupChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source; sources are consulted in insertion order.
    pub fn with_lookup(mut self, lookup: Arc<dyn PriceLookup>) -> Self {
        self.lookups.push(lookup);
        self
    }

    pub fn add_lookup(&mut self, lookup: Arc<dyn PriceLookup>) {
        self.lookups.push(lookup);
    }

    pub fn len(&self) -> usize {
        self.lookups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookups.is_empty()
    }
}

#[async_trait]
impl PriceLookup for PriceLookupChain {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    /// Returns the first price found. If every source failed (none answered
    /// with a clean miss) the last error is returned so callers can tell an
    /// outage from an absent price.
    async fn lookup(&self, query: &PriceQuery) -> Result<Option<PriceQuote>, MarketDataError> {
        let mut last_error: Option<MarketDataError> = None;
        let mut any_clean_miss = false;

        for lookup in &self.lookups {
            match lookup.lookup(query).await {
                Ok(Some(quote)) => {
                    debug!(
                        "Price for {} resolved by {}: {} ({})",
                        query.describe(),
                        lookup.id(),
                        quote.price_per_kg,
                        quote.source
                    );
                    return Ok(Some(quote));
                }
                Ok(None) => {
                    debug!("{} has no price for {}", lookup.id(), query.describe());
                    any_clean_miss = true;
                }
                Err(e) => match e.retry_class() {
                    RetryClass::Never => return Err(e),
                    RetryClass::NextProvider => {
                        warn!(
                            "Price source {} failed for {}: {}. Trying next source.",
                            lookup.id(),
                            query.describe(),
                            e
                        );
                        last_error = Some(e);
                    }
                },
            }
        }

        match last_error {
            Some(e) if !any_clean_miss => Err(e),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubLookup {
        id: &'static str,
        response: Result<Option<Decimal>, MarketDataError>,
        calls: AtomicUsize,
    }

    impl StubLookup {
        fn new(id: &'static str, response: Result<Option<Decimal>, MarketDataError>) -> Arc<Self> {
            Arc::new(Self {
                id,
                response,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PriceLookup for StubLookup {
        fn id(&self) -> &'static str {
            self.id
        }

        async fn lookup(&self, _query: &PriceQuery) -> Result<Option<PriceQuote>, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone().map(|price| {
                price.map(|p| {
                    PriceQuote::new(p, self.id, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
                })
            })
        }
    }

    fn query() -> PriceQuery {
        PriceQuery::new(
            Species::Cattle,
            "Grown Steer",
            Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
        )
    }

    fn unavailable(id: &str) -> MarketDataError {
        MarketDataError::ProviderUnavailable {
            provider: id.to_string(),
            message: "offline".to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_hit_wins() {
        let first = StubLookup::new("FIRST", Ok(Some(dec!(3.1))));
        let second = StubLookup::new("SECOND", Ok(Some(dec!(9.9))));
        let chain = PriceLookupChain::new()
            .with_lookup(first.clone())
            .with_lookup(second.clone());

        let quote = chain.lookup(&query()).await.unwrap().unwrap();
        assert_eq!(quote.price_per_kg, dec!(3.1));
        assert_eq!(second.calls(), 0);
    }

    #[tokio::test]
    async fn test_miss_and_failure_fall_through() {
        let miss = StubLookup::new("MISS", Ok(None));
        let broken = StubLookup::new("BROKEN", Err(unavailable("BROKEN")));
        let hit = StubLookup::new("HIT", Ok(Some(dec!(4.2))));
        let chain = PriceLookupChain::new()
            .with_lookup(miss)
            .with_lookup(broken)
            .with_lookup(hit);

        let quote = chain.lookup(&query()).await.unwrap().unwrap();
        assert_eq!(quote.source, "HIT");
    }

    #[tokio::test]
    async fn test_never_class_stops_chain() {
        let fatal = StubLookup::new("FATAL", Err(MarketDataError::UnknownSpecies("x".into())));
        let hit = StubLookup::new("HIT", Ok(Some(dec!(4.2))));
        let chain = PriceLookupChain::new()
            .with_lookup(fatal)
            .with_lookup(hit.clone());

        assert!(chain.lookup(&query()).await.is_err());
        assert_eq!(hit.calls(), 0);
    }

    #[tokio::test]
    async fn test_all_failed_returns_last_error() {
        let chain = PriceLookupChain::new()
            .with_lookup(StubLookup::new("A", Err(unavailable("A"))))
            .with_lookup(StubLookup::new("B", Err(unavailable("B"))));

        let err = chain.lookup(&query()).await.unwrap_err();
        assert_eq!(err, unavailable("B"));
    }

    #[tokio::test]
    async fn test_miss_plus_failure_is_a_miss() {
        let chain = PriceLookupChain::new()
            .with_lookup(StubLookup::new("A", Err(unavailable("A"))))
            .with_lookup(StubLookup::new("B", Ok(None)));

        assert_eq!(chain.lookup(&query()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_chain_is_a_miss() {
        let chain = PriceLookupChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.lookup(&query()).await.unwrap(), None);
    }
}
