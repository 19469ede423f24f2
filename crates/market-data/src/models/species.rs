use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Livestock species classification.
///
/// Species drives both the price lookup key and the biological constants
/// (gestation length, progeny value) the valuation engine applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Species {
    Cattle,
    Sheep,
    Pig,
    Goat,
}

impl Species {
    /// All supported species, in display order.
    pub const ALL: [Species; 4] = [Species::Cattle, Species::Sheep, Species::Pig, Species::Goat];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cattle => "Cattle",
            Species::Sheep => "Sheep",
            Species::Pig => "Pig",
            Species::Goat => "Goat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = MarketDataError;

    /// Parses a species name, accepting common plural and collective forms
    /// ("Pigs", "Goats", "Beef") case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cattle" | "beef" | "cow" | "cows" => Ok(Species::Cattle),
            "sheep" | "lamb" | "lambs" => Ok(Species::Sheep),
            "pig" | "pigs" | "swine" => Ok(Species::Pig),
            "goat" | "goats" => Ok(Species::Goat),
            _ => Err(MarketDataError::UnknownSpecies(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_species_case_insensitive() {
        assert_eq!("cattle".parse::<Species>().unwrap(), Species::Cattle);
        assert_eq!(" SHEEP ".parse::<Species>().unwrap(), Species::Sheep);
        assert_eq!("Pigs".parse::<Species>().unwrap(), Species::Pig);
        assert_eq!("Goats".parse::<Species>().unwrap(), Species::Goat);
    }

    #[test]
    fn test_parse_unknown_species() {
        let err = "Alpaca".parse::<Species>().unwrap_err();
        assert_eq!(err, MarketDataError::UnknownSpecies("Alpaca".to_string()));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for species in Species::ALL {
            assert_eq!(species.to_string().parse::<Species>().unwrap(), species);
        }
    }
}
