//! Herd valuation domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use herdfolio_market_data::{PriceQuote, UNKNOWN_PRICE_SOURCE};

/// Valuation breakdown for one livestock group at one point in time.
///
/// Recomputed on every request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HerdValuation {
    pub herd_id: String,
    /// projected weight × head count × price per kg
    pub physical_value: Decimal,
    /// Accrued value of expected progeny
    pub breeding_accrual: Decimal,
    /// physical value + breeding accrual
    pub gross_value: Decimal,
    /// Value of head expected to be lost to mortality
    pub mortality_deduction: Decimal,
    /// gross value - mortality deduction
    pub net_value: Decimal,
    /// Holding cost accrued since acquisition
    pub cost_to_carry: Decimal,
    /// net value - cost to carry; the headline figure
    pub net_realizable_value: Decimal,
    pub price_per_kg: Decimal,
    /// Which market price was used ("Unknown" when none resolved)
    pub price_source: String,
    /// Liveweight per head at the valuation date, kg
    pub projected_weight: Decimal,
    pub days_held: i64,
    pub projected_losses: Decimal,
    pub expected_progeny: Decimal,
    pub valuation_date: DateTime<Utc>,
}

impl HerdValuation {
    /// A valuation with every figure at zero.
    pub fn zero(herd_id: impl Into<String>, valuation_date: DateTime<Utc>) -> Self {
        Self {
            herd_id: herd_id.into(),
            physical_value: Decimal::ZERO,
            breeding_accrual: Decimal::ZERO,
            gross_value: Decimal::ZERO,
            mortality_deduction: Decimal::ZERO,
            net_value: Decimal::ZERO,
            cost_to_carry: Decimal::ZERO,
            net_realizable_value: Decimal::ZERO,
            price_per_kg: Decimal::ZERO,
            price_source: UNKNOWN_PRICE_SOURCE.to_string(),
            projected_weight: Decimal::ZERO,
            days_held: 0,
            projected_losses: Decimal::ZERO,
            expected_progeny: Decimal::ZERO,
            valuation_date,
        }
    }

    /// True when no market price backed this valuation.
    pub fn is_unpriced(&self) -> bool {
        self.price_source == UNKNOWN_PRICE_SOURCE
    }
}

/// The market price fed into a valuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrice {
    pub price_per_kg: Decimal,
    pub source: String,
}

impl ResolvedPrice {
    pub fn new(price_per_kg: Decimal, source: impl Into<String>) -> Self {
        Self {
            price_per_kg,
            source: source.into(),
        }
    }

    /// Zero price labelled "Unknown", used whenever lookup fails.
    pub fn unknown() -> Self {
        Self::new(Decimal::ZERO, UNKNOWN_PRICE_SOURCE)
    }
}

impl From<PriceQuote> for ResolvedPrice {
    fn from(quote: PriceQuote) -> Self {
        Self::new(quote.price_per_kg, quote.source)
    }
}
