use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::constants::{DAYS_PER_YEAR, DECIMAL_PRECISION};
use crate::livestock::{BreedingStatus, LivestockGroup};
use crate::portfolio::valuation::species_profile::species_profile;
use crate::portfolio::valuation::{HerdValuation, ResolvedPrice};
use crate::settings::ValuationPreferences;
use crate::utils::time_utils::whole_days_between;

/// Calculates the valuation of one livestock group at `as_of` using an
/// already-resolved market price.
///
/// The result never fails: a missing price arrives here as
/// [`ResolvedPrice::unknown`] and simply values the animals at zero while
/// holding costs keep accruing.
///
/// Monetary components are rounded to `DECIMAL_PRECISION` first and the
/// gross, net and net realizable values are derived from the rounded parts,
/// so `net_realizable_value == physical + breeding - mortality - cost` holds
/// exactly.
///
/// # Arguments
///
/// * `group` - The livestock group snapshot.
/// * `preferences` - Holding cost and other user-level settings.
/// * `price` - Price per kg and its source label.
/// * `as_of` - Valuation instant; earlier than acquisition clamps to day zero.
///
pub fn calculate_herd_value(
    group: &LivestockGroup,
    preferences: &ValuationPreferences,
    price: &ResolvedPrice,
    as_of: DateTime<Utc>,
) -> HerdValuation {
    if group.head_count == 0 {
        return HerdValuation::zero(group.id.clone(), as_of);
    }

    let days_held = whole_days_between(group.acquisition_date, as_of);
    let head_count = Decimal::from(group.head_count);
    let projected_weight = projected_weight(group, days_held);

    let physical_value =
        (projected_weight * head_count * price.price_per_kg).round_dp(DECIMAL_PRECISION);

    let (expected_progeny, breeding_accrual) = breeding_accrual(group, as_of);
    let breeding_accrual = breeding_accrual.round_dp(DECIMAL_PRECISION);

    let projected_losses = projected_losses(group, days_held);
    let mortality_deduction =
        (projected_losses * projected_weight * price.price_per_kg).round_dp(DECIMAL_PRECISION);

    let cost_to_carry = (preferences.cost_per_head_per_day * head_count * Decimal::from(days_held))
        .round_dp(DECIMAL_PRECISION);

    let gross_value = physical_value + breeding_accrual;
    let net_value = gross_value - mortality_deduction;
    let net_realizable_value = net_value - cost_to_carry;

    HerdValuation {
        herd_id: group.id.clone(),
        physical_value,
        breeding_accrual,
        gross_value,
        mortality_deduction,
        net_value,
        cost_to_carry,
        net_realizable_value,
        price_per_kg: price.price_per_kg,
        price_source: price.source.clone(),
        projected_weight,
        days_held,
        projected_losses: projected_losses.round_dp(DECIMAL_PRECISION),
        expected_progeny: expected_progeny.round_dp(DECIMAL_PRECISION),
        valuation_date: as_of,
    }
}

/// Liveweight per head after `days_held` days of linear gain. Unbounded.
pub fn projected_weight(group: &LivestockGroup, days_held: i64) -> Decimal {
    group.initial_weight + group.daily_weight_gain * Decimal::from(days_held)
}

/// Expected progeny and their accrued value for a pregnant group.
///
/// Returns `(expected_progeny, accrual)`, both unrounded. Progress through
/// gestation is capped at one full cycle.
pub fn breeding_accrual(group: &LivestockGroup, as_of: DateTime<Utc>) -> (Decimal, Decimal) {
    let (joined_date, calving_rate) = match &group.breeding {
        BreedingStatus::Pregnant {
            joined_date,
            calving_rate,
        } => (*joined_date, *calving_rate),
        BreedingStatus::NonBreeder | BreedingStatus::Open { .. } => {
            return (Decimal::ZERO, Decimal::ZERO)
        }
    };

    let profile = species_profile(group.species);
    let cycle_days = Decimal::from(profile.gestation_days);
    let days_since_joined = Decimal::from(whole_days_between(joined_date, as_of)).min(cycle_days);

    // Multiply before dividing so a completed cycle stays exact.
    let weighted = Decimal::from(group.head_count) * calving_rate * days_since_joined;
    let expected_progeny = weighted / cycle_days;
    let accrual = weighted * profile.progeny_value / cycle_days;
    (expected_progeny, accrual)
}

/// Head expected to die over `days_held`, never more than the whole group.
pub fn projected_losses(group: &LivestockGroup, days_held: i64) -> Decimal {
    let rate = match group.mortality_rate {
        Some(rate) if rate > Decimal::ZERO => rate,
        _ => return Decimal::ZERO,
    };
    let head_count = Decimal::from(group.head_count);
    let losses = head_count * rate * Decimal::from(days_held) / DAYS_PER_YEAR;
    losses.min(head_count)
}
