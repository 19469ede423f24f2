//! In-memory historical price book.
//!
//! Holds saleyard price observations and resolves a query in three tiers:
//!
//! 1. **Saleyard** - the latest observation at the requested saleyard
//! 2. **State Indicator** - mean of the latest day's observations in the requested state
//! 3. **National Benchmark** - mean of the latest day's observations anywhere
//!
//! Only observations dated on or before the query's as-of date are eligible,
//! which is what makes historical valuations reproducible.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{PriceQuery, PriceQuote, PriceRecord, PriceTier};

use super::traits::PriceLookup;

const PROVIDER_ID: &str = "PRICE_BOOK";

/// Precision applied to averaged indicator prices.
const INDICATOR_PRECISION: u32 = 4;

/// Thread-safe store of historical price records, keyed by lowercase category.
#[derive(Default)]
pub struct InMemoryPriceBook {
    records: RwLock<HashMap<String, Vec<PriceRecord>>>,
}

impl InMemoryPriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a price book from a JSON array of [`PriceRecord`]s.
    pub fn from_json(json: &str) -> Result<Self, MarketDataError> {
        let records: Vec<PriceRecord> = serde_json::from_str(json)?;
        let book = Self::new();
        book.extend(records)?;
        Ok(book)
    }

    fn read_records(&self) -> RwLockReadGuard<'_, HashMap<String, Vec<PriceRecord>>> {
        self.records.read().unwrap_or_else(|poisoned| {
            warn!("Price book lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_records(&self) -> RwLockWriteGuard<'_, HashMap<String, Vec<PriceRecord>>> {
        self.records.write().unwrap_or_else(|poisoned| {
            warn!("Price book lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Add a single observation. Negative prices are rejected.
    pub fn insert(&self, record: PriceRecord) -> Result<(), MarketDataError> {
        validate_record(&record)?;
        self.write_records()
            .entry(record.category.trim().to_ascii_lowercase())
            .or_default()
            .push(record);
        Ok(())
    }

    /// Add many observations. Validation happens up front, so either every
    /// record is stored or none are.
    pub fn extend(&self, records: Vec<PriceRecord>) -> Result<(), MarketDataError> {
        for record in &records {
            validate_record(record)?;
        }
        let mut guard = self.write_records();
        for record in records {
            guard
                .entry(record.category.trim().to_ascii_lowercase())
                .or_default()
                .push(record);
        }
        Ok(())
    }

    /// Total number of stored observations.
    pub fn len(&self) -> usize {
        self.read_records().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a query against the stored observations.
    pub fn resolve(&self, query: &PriceQuery) -> Option<PriceQuote> {
        let guard = self.read_records();
        let by_category = guard.get(&query.category.trim().to_ascii_lowercase())?;
        let as_of_date = query.price_date;

        let eligible: Vec<&PriceRecord> = by_category
            .iter()
            .filter(|r| r.species.map_or(true, |s| s == query.species))
            .filter(|r| r.price_date <= as_of_date)
            .collect();
        let candidates = narrow_to_breed(eligible, query.breed.as_deref());
        if candidates.is_empty() {
            return None;
        }

        if let Some(saleyard) = query.saleyard.as_deref() {
            let at_saleyard = candidates
                .iter()
                .filter(|r| r.saleyard.eq_ignore_ascii_case(saleyard))
                .max_by_key(|r| r.price_date);
            if let Some(record) = at_saleyard {
                return Some(PriceQuote::new(
                    record.price_per_kg,
                    format!("{}: {}", PriceTier::Saleyard.label(), record.saleyard),
                    record.price_date,
                ));
            }
            debug!("No saleyard price at '{}' for {}", saleyard, query.describe());
        }

        if let Some(state) = query.state.as_deref() {
            let in_state: Vec<&PriceRecord> = candidates
                .iter()
                .copied()
                .filter(|r| r.state.eq_ignore_ascii_case(state))
                .collect();
            if let Some((price, date)) = latest_day_mean(&in_state) {
                return Some(PriceQuote::new(
                    price,
                    format!("{}: {}", PriceTier::StateIndicator.label(), state.to_uppercase()),
                    date,
                ));
            }
            debug!("No state indicator in '{}' for {}", state, query.describe());
        }

        latest_day_mean(&candidates).map(|(price, date)| {
            PriceQuote::new(price, PriceTier::NationalBenchmark.label(), date)
        })
    }
}

fn validate_record(record: &PriceRecord) -> Result<(), MarketDataError> {
    if record.price_per_kg.is_sign_negative() {
        return Err(MarketDataError::InvalidPrice {
            provider: PROVIDER_ID.to_string(),
            message: format!(
                "negative price {} for {} at {} on {}",
                record.price_per_kg, record.category, record.saleyard, record.price_date
            ),
        });
    }
    Ok(())
}

/// Prefer breed-specific observations when any exist for the requested breed,
/// otherwise fall back to breed-agnostic ones.
fn narrow_to_breed<'a>(records: Vec<&'a PriceRecord>, breed: Option<&str>) -> Vec<&'a PriceRecord> {
    if let Some(breed) = breed {
        let matching: Vec<&PriceRecord> = records
            .iter()
            .copied()
            .filter(|r| r.breed.as_deref().is_some_and(|b| b.eq_ignore_ascii_case(breed)))
            .collect();
        if !matching.is_empty() {
            return matching;
        }
    }
    records.into_iter().filter(|r| r.breed.is_none()).collect()
}

/// Mean price of the observations on the most recent date.
fn latest_day_mean(records: &[&PriceRecord]) -> Option<(Decimal, NaiveDate)> {
    let latest = records.iter().map(|r| r.price_date).max()?;
    let same_day: Vec<Decimal> = records
        .iter()
        .filter(|r| r.price_date == latest)
        .map(|r| r.price_per_kg)
        .collect();
    let total: Decimal = same_day.iter().sum();
    let mean = total / Decimal::from(same_day.len());
    Some((mean.round_dp(INDICATOR_PRECISION), latest))
}

#[async_trait]
impl PriceLookup for InMemoryPriceBook {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn lookup(&self, query: &PriceQuery) -> Result<Option<PriceQuote>, MarketDataError> {
        Ok(self.resolve(query))
    }
}
