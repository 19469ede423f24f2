//! Biological constants per species.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use herdfolio_market_data::Species;

/// Fixed reproductive constants used for breeding accrual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesProfile {
    /// Joining-to-birth length in days
    pub gestation_days: u32,
    /// Approximate market value of one newborn head
    pub progeny_value: Decimal,
}

pub fn species_profile(species: Species) -> SpeciesProfile {
    match species {
        Species::Cattle => SpeciesProfile {
            gestation_days: 283,
            progeny_value: dec!(1200),
        },
        Species::Sheep => SpeciesProfile {
            gestation_days: 150,
            progeny_value: dec!(150),
        },
        Species::Pig => SpeciesProfile {
            gestation_days: 114,
            progeny_value: dec!(120),
        },
        Species::Goat => SpeciesProfile {
            gestation_days: 150,
            progeny_value: dec!(180),
        },
    }
}
