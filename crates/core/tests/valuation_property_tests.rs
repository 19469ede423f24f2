//! Property-based integration tests for the valuation engine.
//!
//! These tests verify that the valuation invariants hold across arbitrary
//! herds, using the `proptest` crate for random test case generation.

use chrono::{DateTime, Duration, TimeZone, Utc};
use herdfolio_core::livestock::{BreedingStatus, LivestockGroup};
use herdfolio_core::portfolio::valuation::{
    calculate_herd_value, species_profile::species_profile, HerdValuation, ResolvedPrice,
};
use herdfolio_core::settings::ValuationPreferences;
use herdfolio_market_data::Species;
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

fn acquired() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()
}

/// Decimal with two places in `[0, max_hundredths / 100]`.
fn arb_decimal(max_hundredths: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_hundredths).prop_map(|n| Decimal::new(n, 2))
}

fn arb_species() -> impl Strategy<Value = Species> {
    prop_oneof![
        Just(Species::Cattle),
        Just(Species::Sheep),
        Just(Species::Pig),
        Just(Species::Goat),
    ]
}

fn arb_breeding() -> impl Strategy<Value = BreedingStatus> {
    prop_oneof![
        Just(BreedingStatus::NonBreeder),
        arb_decimal(100).prop_map(|calving_rate| BreedingStatus::Open { calving_rate }),
        (arb_decimal(100), 0i64..400).prop_map(|(calving_rate, days_after_acquisition)| {
            BreedingStatus::Pregnant {
                joined_date: acquired() + Duration::days(days_after_acquisition),
                calving_rate,
            }
        }),
    ]
}

/// Generates a valid livestock group.
fn arb_group() -> impl Strategy<Value = LivestockGroup> {
    (
        arb_species(),
        0u32..2000,                            // head_count
        arb_decimal(80_000),                   // initial_weight
        arb_decimal(300),                      // daily_weight_gain
        arb_breeding(),
        proptest::option::of(arb_decimal(100)), // mortality_rate
    )
        .prop_map(|(species, head_count, weight, gain, breeding, mortality)| {
            let mut group = LivestockGroup::new(
                "herd",
                species,
                "Breeder",
                head_count,
                weight,
                gain,
                acquired(),
            );
            group.breeding = breeding;
            group.mortality_rate = mortality;
            group
        })
}

fn arb_price() -> impl Strategy<Value = ResolvedPrice> {
    prop_oneof![
        Just(ResolvedPrice::unknown()),
        arb_decimal(2_000).prop_map(|p| ResolvedPrice::new(p, "National Benchmark")),
    ]
}

fn prefs(cost_per_head_per_day: Decimal) -> ValuationPreferences {
    ValuationPreferences {
        cost_per_head_per_day,
        ..Default::default()
    }
}

fn value(
    group: &LivestockGroup,
    cost: Decimal,
    price: &ResolvedPrice,
    days: i64,
) -> HerdValuation {
    calculate_herd_value(group, &prefs(cost), price, acquired() + Duration::days(days))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Valuing the same herd at the same instant twice gives identical results.
    #[test]
    fn prop_valuation_is_idempotent(
        group in arb_group(),
        cost in arb_decimal(100),
        price in arb_price(),
        days in -60i64..2000,
    ) {
        prop_assert_eq!(value(&group, cost, &price, days), value(&group, cost, &price, days));
    }

    /// The headline figure is always the exact sum of its components.
    #[test]
    fn prop_nrv_identity(
        group in arb_group(),
        cost in arb_decimal(100),
        price in arb_price(),
        days in -60i64..2000,
    ) {
        let v = value(&group, cost, &price, days);
        prop_assert_eq!(v.gross_value, v.physical_value + v.breeding_accrual);
        prop_assert_eq!(v.net_value, v.gross_value - v.mortality_deduction);
        prop_assert_eq!(
            v.net_realizable_value,
            v.physical_value + v.breeding_accrual - v.mortality_deduction - v.cost_to_carry
        );
    }

    /// An empty herd is worth exactly nothing.
    #[test]
    fn prop_zero_head_is_zero(
        mut group in arb_group(),
        cost in arb_decimal(100),
        price in arb_price(),
        days in 0i64..2000,
    ) {
        group.head_count = 0;
        let v = value(&group, cost, &price, days);
        prop_assert_eq!(v.net_realizable_value, Decimal::ZERO);
        prop_assert_eq!(v.gross_value, Decimal::ZERO);
        prop_assert_eq!(v.cost_to_carry, Decimal::ZERO);
    }

    /// Weight and physical value never fall as time passes.
    #[test]
    fn prop_weight_is_monotonic(
        group in arb_group(),
        price in arb_price(),
        earlier in 0i64..1000,
        extra in 0i64..1000,
    ) {
        let a = value(&group, Decimal::ZERO, &price, earlier);
        let b = value(&group, Decimal::ZERO, &price, earlier + extra);
        prop_assert!(b.projected_weight >= a.projected_weight);
        prop_assert!(b.physical_value >= a.physical_value);
    }

    /// Mortality never removes more animals than the group holds.
    #[test]
    fn prop_mortality_is_capped(
        group in arb_group(),
        price in arb_price(),
        days in 0i64..5000,
    ) {
        let v = value(&group, Decimal::ZERO, &price, days);
        prop_assert!(v.projected_losses <= Decimal::from(group.head_count));
        prop_assert!(v.mortality_deduction <= v.physical_value);
        prop_assert!(v.mortality_deduction >= Decimal::ZERO);
    }

    /// Only pregnant groups accrue breeding value, and never beyond one full cycle.
    #[test]
    fn prop_breeding_is_gated(
        group in arb_group(),
        price in arb_price(),
        days in 0i64..2000,
    ) {
        let v = value(&group, Decimal::ZERO, &price, days);
        match &group.breeding {
            BreedingStatus::Pregnant { calving_rate, .. } => {
                let profile = species_profile(group.species);
                let ceiling = Decimal::from(group.head_count) * calving_rate * profile.progeny_value;
                prop_assert!(v.breeding_accrual >= Decimal::ZERO);
                prop_assert!(v.breeding_accrual <= ceiling);
            }
            BreedingStatus::NonBreeder | BreedingStatus::Open { .. } => {
                prop_assert_eq!(v.breeding_accrual, Decimal::ZERO);
                prop_assert_eq!(v.expected_progeny, Decimal::ZERO);
            }
        }
    }

    /// Holding cost grows linearly with days held and ignores price.
    #[test]
    fn prop_cost_to_carry_is_linear(
        group in arb_group(),
        cost in arb_decimal(100),
        price in arb_price(),
        days in 0i64..1000,
    ) {
        let single = value(&group, cost, &price, days);
        let double = value(&group, cost, &ResolvedPrice::unknown(), days * 2);
        let expected = if group.head_count == 0 {
            Decimal::ZERO
        } else {
            cost * Decimal::from(group.head_count) * Decimal::from(days)
        };
        prop_assert_eq!(single.cost_to_carry, expected);
        prop_assert_eq!(double.cost_to_carry, single.cost_to_carry * Decimal::TWO);
    }

    /// Valuing before acquisition behaves like day zero.
    #[test]
    fn prop_before_acquisition_clamps(
        group in arb_group(),
        cost in arb_decimal(100),
        price in arb_price(),
        days_before in 1i64..365,
    ) {
        let v = value(&group, cost, &price, -days_before);
        prop_assert_eq!(v.days_held, 0);
        prop_assert_eq!(v.cost_to_carry, Decimal::ZERO);
        if group.head_count > 0 {
            prop_assert_eq!(v.projected_weight, group.initial_weight);
        }
    }
}
