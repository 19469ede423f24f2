//! Portfolio summary domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use herdfolio_market_data::Species;

use crate::livestock::LivestockGroup;
use crate::portfolio::valuation::HerdValuation;
use crate::utils::time_utils::{valuation_date_from_utc, DEFAULT_VALUATION_TZ};

/// Totals for one species.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesBreakdown {
    pub species: Species,
    pub herd_count: usize,
    pub head_count: u64,
    pub physical_value: Decimal,
    pub breeding_accrual: Decimal,
    pub net_realizable_value: Decimal,
}

impl SpeciesBreakdown {
    fn empty(species: Species) -> Self {
        Self {
            species,
            herd_count: 0,
            head_count: 0,
            physical_value: Decimal::ZERO,
            breeding_accrual: Decimal::ZERO,
            net_realizable_value: Decimal::ZERO,
        }
    }
}

/// Portfolio-wide totals at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub as_of: DateTime<Utc>,
    /// Local calendar date of `as_of`
    pub valuation_date: NaiveDate,
    pub total_physical_value: Decimal,
    pub total_breeding_accrual: Decimal,
    pub total_gross_value: Decimal,
    pub total_mortality_deduction: Decimal,
    pub total_net_value: Decimal,
    pub total_cost_to_carry: Decimal,
    /// Headline portfolio value
    pub total_net_realizable_value: Decimal,
    pub total_head_count: u64,
    pub herd_count: usize,
    /// Sorted by net realizable value, highest first
    pub breakdown: Vec<SpeciesBreakdown>,
    /// Herds valued without a market price
    pub unpriced_herd_ids: Vec<String>,
}

impl PortfolioSummary {
    pub fn empty(as_of: DateTime<Utc>) -> Self {
        Self {
            as_of,
            valuation_date: valuation_date_from_utc(as_of, DEFAULT_VALUATION_TZ),
            total_physical_value: Decimal::ZERO,
            total_breeding_accrual: Decimal::ZERO,
            total_gross_value: Decimal::ZERO,
            total_mortality_deduction: Decimal::ZERO,
            total_net_value: Decimal::ZERO,
            total_cost_to_carry: Decimal::ZERO,
            total_net_realizable_value: Decimal::ZERO,
            total_head_count: 0,
            herd_count: 0,
            breakdown: Vec::new(),
            unpriced_herd_ids: Vec::new(),
        }
    }

    /// Aggregate valuations. `groups` and `valuations` are paired by position.
    pub fn from_valuations(
        as_of: DateTime<Utc>,
        groups: &[LivestockGroup],
        valuations: &[HerdValuation],
    ) -> Self {
        let mut summary = Self::empty(as_of);
        let mut by_species: BTreeMap<Species, SpeciesBreakdown> = BTreeMap::new();

        for (group, valuation) in groups.iter().zip(valuations) {
            summary.total_physical_value += valuation.physical_value;
            summary.total_breeding_accrual += valuation.breeding_accrual;
            summary.total_gross_value += valuation.gross_value;
            summary.total_mortality_deduction += valuation.mortality_deduction;
            summary.total_net_value += valuation.net_value;
            summary.total_cost_to_carry += valuation.cost_to_carry;
            summary.total_net_realizable_value += valuation.net_realizable_value;
            summary.total_head_count += u64::from(group.head_count);
            summary.herd_count += 1;

            if group.head_count > 0 && valuation.is_unpriced() {
                summary.unpriced_herd_ids.push(valuation.herd_id.clone());
            }

            let entry = by_species
                .entry(group.species)
                .or_insert_with(|| SpeciesBreakdown::empty(group.species));
            entry.herd_count += 1;
            entry.head_count += u64::from(group.head_count);
            entry.physical_value += valuation.physical_value;
            entry.breeding_accrual += valuation.breeding_accrual;
            entry.net_realizable_value += valuation.net_realizable_value;
        }

        let mut breakdown: Vec<SpeciesBreakdown> = by_species.into_values().collect();
        breakdown.sort_by(|a, b| b.net_realizable_value.cmp(&a.net_realizable_value));
        summary.breakdown = breakdown;
        summary
    }
}

/// A single point in portfolio value history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHistoryPoint {
    /// Local valuation date
    pub date: NaiveDate,
    pub gross_value: Decimal,
    pub cost_to_carry: Decimal,
    pub net_realizable_value: Decimal,
    pub head_count: u64,
    pub herd_count: usize,
}

impl PortfolioHistoryPoint {
    pub fn from_summary(date: NaiveDate, summary: &PortfolioSummary) -> Self {
        Self {
            date,
            gross_value: summary.total_gross_value,
            cost_to_carry: summary.total_cost_to_carry,
            net_realizable_value: summary.total_net_realizable_value,
            head_count: summary.total_head_count,
            herd_count: summary.herd_count,
        }
    }
}
