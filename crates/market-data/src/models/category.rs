//! Livestock category catalogue.
//!
//! Every saleyard category belongs to one species and carries a benchmark
//! multiplier relative to the Grown Steer base price. The multipliers mirror
//! the relative price levels of the historical saleyard series.

use std::collections::HashMap;

use lazy_static::lazy_static;
use rust_decimal::Decimal;

use super::species::Species;

/// (species, category, multiplier in hundredths)
const CATEGORY_TABLE: &[(Species, &str, i64)] = &[
    // Cattle
    (Species::Cattle, "Feeder Steer", 118),
    (Species::Cattle, "Feeder Heifer", 115),
    (Species::Cattle, "Yearling Steer", 122),
    (Species::Cattle, "Yearling Bull", 122),
    (Species::Cattle, "Grown Steer", 100),
    (Species::Cattle, "Grown Bull", 100),
    (Species::Cattle, "Weaner Steer", 118),
    (Species::Cattle, "Weaner Bull", 118),
    (Species::Cattle, "Weaner Heifer", 118),
    (Species::Cattle, "Breeding Cow", 115),
    (Species::Cattle, "Breeder", 115),
    (Species::Cattle, "Dry Cow", 115),
    (Species::Cattle, "Cull Cow", 95),
    (Species::Cattle, "Heifer", 115),
    (Species::Cattle, "First Calf Heifer", 115),
    (Species::Cattle, "Slaughter Cattle", 92),
    (Species::Cattle, "Calves", 125),
    // Sheep
    (Species::Sheep, "Breeding Ewe", 115),
    (Species::Sheep, "Maiden Ewe", 320),
    (Species::Sheep, "Dry Ewe", 320),
    (Species::Sheep, "Cull Ewe", 280),
    (Species::Sheep, "Weaner Ewe", 100),
    (Species::Sheep, "Feeder Ewe", 100),
    (Species::Sheep, "Slaughter Ewe", 280),
    (Species::Sheep, "Wether Lamb", 350),
    (Species::Sheep, "Weaner Lamb", 350),
    (Species::Sheep, "Feeder Lamb", 350),
    (Species::Sheep, "Slaughter Lamb", 330),
    (Species::Sheep, "Lambs", 330),
    // Pigs
    (Species::Pig, "Breeder", 115),
    (Species::Pig, "Dry Sow", 66),
    (Species::Pig, "Cull Sow", 60),
    (Species::Pig, "Weaner Pig", 70),
    (Species::Pig, "Feeder Pig", 70),
    (Species::Pig, "Grower Pig", 65),
    (Species::Pig, "Finisher Pig", 65),
    (Species::Pig, "Porker", 66),
    (Species::Pig, "Baconer", 66),
    (Species::Pig, "Grower Barrow", 65),
    (Species::Pig, "Finisher Barrow", 65),
    // Goats
    (Species::Goat, "Breeder Doe", 130),
    (Species::Goat, "Dry Doe", 130),
    (Species::Goat, "Cull Doe", 120),
    (Species::Goat, "Breeder Buck", 135),
    (Species::Goat, "Sale Buck", 135),
    (Species::Goat, "Mature Wether", 130),
    (Species::Goat, "Rangeland Goat", 130),
    (Species::Goat, "Capretto", 153),
    (Species::Goat, "Chevon", 125),
];

lazy_static! {
    static ref MULTIPLIERS: HashMap<(Species, String), Decimal> = CATEGORY_TABLE
        .iter()
        .map(|(species, category, hundredths)| {
            (
                (*species, category.to_ascii_lowercase()),
                Decimal::new(*hundredths, 2),
            )
        })
        .collect();
}

/// Benchmark multiplier for a category relative to the Grown Steer base price.
///
/// Categories outside the catalogue price at the base rate (multiplier 1).
pub fn category_multiplier(species: Species, category: &str) -> Decimal {
    MULTIPLIERS
        .get(&(species, category.trim().to_ascii_lowercase()))
        .copied()
        .unwrap_or(Decimal::ONE)
}

/// Catalogued categories for a species, in catalogue order.
pub fn known_categories(species: Species) -> Vec<&'static str> {
    CATEGORY_TABLE
        .iter()
        .filter(|(s, _, _)| *s == species)
        .map(|(_, category, _)| *category)
        .collect()
}
