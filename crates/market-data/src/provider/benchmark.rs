//! Category-multiplier benchmark price source.
//!
//! Quotes `base_price_per_kg × category_multiplier` for any catalogued
//! category. Used as the last link of a lookup chain so that a herd with no
//! saleyard history still receives an indicative price.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::MarketDataError;
use crate::models::{category_multiplier, PriceQuery, PriceQuote, PriceTier};

use super::traits::PriceLookup;

const PROVIDER_ID: &str = "BENCHMARK";

/// Default base price (Grown Steer, $/kg liveweight).
pub const DEFAULT_BASE_PRICE_PER_KG: Decimal = dec!(3.30);

pub struct BenchmarkPriceLookup {
    base_price_per_kg: Decimal,
}

impl BenchmarkPriceLookup {
    pub fn new(base_price_per_kg: Decimal) -> Self {
        Self { base_price_per_kg }
    }

    pub fn base_price_per_kg(&self) -> Decimal {
        self.base_price_per_kg
    }
}

impl Default for BenchmarkPriceLookup {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PRICE_PER_KG)
    }
}

#[async_trait]
impl PriceLookup for BenchmarkPriceLookup {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn lookup(&self, query: &PriceQuery) -> Result<Option<PriceQuote>, MarketDataError> {
        if self.base_price_per_kg.is_sign_negative() {
            return Err(MarketDataError::InvalidPrice {
                provider: PROVIDER_ID.to_string(),
                message: format!("negative base price {}", self.base_price_per_kg),
            });
        }
        if self.base_price_per_kg.is_zero() {
            return Ok(None);
        }

        let multiplier = category_multiplier(query.species, &query.category);
        Ok(Some(PriceQuote::new(
            (self.base_price_per_kg * multiplier).round_dp(4),
            PriceTier::NationalBenchmark.label(),
            query.price_date,
        )))
    }
}
