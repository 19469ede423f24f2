use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::species::Species;

/// Source label used when no price could be resolved.
pub const UNKNOWN_PRICE_SOURCE: &str = "Unknown";

/// Request key for a price per kilogram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceQuery {
    pub species: Species,

    /// Saleyard category (e.g. "Grown Steer", "Breeding Ewe")
    pub category: String,

    pub breed: Option<String>,

    /// State or territory code (NSW, VIC, QLD, SA, WA, ...)
    pub state: Option<String>,

    /// Preferred saleyard
    pub saleyard: Option<String>,

    /// Point in time the price should be valid for.
    pub as_of: DateTime<Utc>,

    /// Calendar date of `as_of` in the valuation timezone. Sources return the
    /// latest price dated on or before it. Defaults to the UTC date.
    pub price_date: NaiveDate,
}

impl PriceQuery {
    pub fn new(species: Species, category: impl Into<String>, as_of: DateTime<Utc>) -> Self {
        Self {
            species,
            category: category.into(),
            breed: None,
            state: None,
            saleyard: None,
            as_of,
            price_date: as_of.date_naive(),
        }
    }

    /// Set the local calendar date used to pick eligible prices.
    pub fn with_price_date(mut self, price_date: NaiveDate) -> Self {
        self.price_date = price_date;
        self
    }

    pub fn with_breed(mut self, breed: Option<String>) -> Self {
        self.breed = breed;
        self
    }

    pub fn with_state(mut self, state: Option<String>) -> Self {
        self.state = state;
        self
    }

    pub fn with_saleyard(mut self, saleyard: Option<String>) -> Self {
        self.saleyard = saleyard;
        self
    }

    /// Short description used in log lines and not-found errors.
    pub fn describe(&self) -> String {
        format!(
            "{}/{} (state: {}, saleyard: {}) as of {}",
            self.species,
            self.category,
            self.state.as_deref().unwrap_or("-"),
            self.saleyard.as_deref().unwrap_or("-"),
            self.price_date
        )
    }
}

/// Resolution tier of a price, from most to least specific.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    Saleyard,
    StateIndicator,
    NationalBenchmark,
}

impl PriceTier {
    pub fn label(&self) -> &'static str {
        match self {
            PriceTier::Saleyard => "Saleyard",
            PriceTier::StateIndicator => "State Indicator",
            PriceTier::NationalBenchmark => "National Benchmark",
        }
    }
}

/// A resolved market price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub price_per_kg: Decimal,

    /// Human-readable description of which market price was used
    pub source: String,

    /// Date the price was observed
    pub price_date: NaiveDate,
}

impl PriceQuote {
    pub fn new(price_per_kg: Decimal, source: impl Into<String>, price_date: NaiveDate) -> Self {
        Self {
            price_per_kg,
            source: source.into(),
            price_date,
        }
    }
}

/// One historical saleyard price observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    /// Species the category belongs to. `None` matches any species.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,

    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,

    pub saleyard: String,

    pub state: String,

    pub price_per_kg: Decimal,

    pub price_date: NaiveDate,
}

impl PriceRecord {
    pub fn new(
        category: impl Into<String>,
        saleyard: impl Into<String>,
        state: impl Into<String>,
        price_per_kg: Decimal,
        price_date: NaiveDate,
    ) -> Self {
        Self {
            species: None,
            category: category.into(),
            breed: None,
            saleyard: saleyard.into(),
            state: state.into(),
            price_per_kg,
            price_date,
        }
    }

    pub fn for_species(mut self, species: Species) -> Self {
        self.species = Some(species);
        self
    }

    pub fn for_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }
}
