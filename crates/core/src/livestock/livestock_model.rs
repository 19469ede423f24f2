//! Livestock group domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use herdfolio_market_data::Species;

use crate::errors::{Result, ValidationError};
use crate::settings::ValuationPreferences;

/// Breeding state of a group.
///
/// A pregnant group always carries the date it was joined, so a "pregnant
/// but never joined" group cannot be constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum BreedingStatus {
    /// Not kept for breeding.
    NonBreeder,
    /// Breeders that are not currently joined.
    #[serde(rename_all = "camelCase")]
    Open { calving_rate: Decimal },
    /// Joined breeders carrying progeny.
    #[serde(rename_all = "camelCase")]
    Pregnant {
        joined_date: DateTime<Utc>,
        calving_rate: Decimal,
    },
}

impl BreedingStatus {
    pub fn is_breeder(&self) -> bool {
        !matches!(self, BreedingStatus::NonBreeder)
    }

    pub fn is_pregnant(&self) -> bool {
        matches!(self, BreedingStatus::Pregnant { .. })
    }
}

/// Terminal sale of a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub sold_date: DateTime<Utc>,
    pub sold_price: Decimal,
}

/// A validated livestock group snapshot, read by the valuation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivestockGroup {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    /// Saleyard category (e.g. "Grown Steer")
    pub category: String,
    pub head_count: u32,
    /// Liveweight per head at acquisition, kg
    pub initial_weight: Decimal,
    /// kg per head per day
    pub daily_weight_gain: Decimal,
    pub acquisition_date: DateTime<Utc>,
    pub breeding: BreedingStatus,
    /// Annual mortality as a fraction
    pub mortality_rate: Option<Decimal>,
    /// Overrides the default saleyard from preferences
    pub saleyard: Option<String>,
    /// Overrides the state from preferences
    pub state: Option<String>,
    pub sale: Option<SaleRecord>,
}

impl LivestockGroup {
    /// Create a non-breeding group with no mortality, sale or pricing overrides.
    pub fn new(
        id: impl Into<String>,
        species: Species,
        category: impl Into<String>,
        head_count: u32,
        initial_weight: Decimal,
        daily_weight_gain: Decimal,
        acquisition_date: DateTime<Utc>,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            species,
            breed: None,
            category: category.into(),
            head_count,
            initial_weight,
            daily_weight_gain,
            acquisition_date,
            breeding: BreedingStatus::NonBreeder,
            mortality_rate: None,
            saleyard: None,
            state: None,
            sale: None,
        }
    }

    pub fn is_sold(&self) -> bool {
        self.sale.is_some()
    }

    /// Whether the group counts towards live aggregation at `as_of`: unsold
    /// and already acquired. A recorded sale excludes it whatever its date.
    pub fn is_active_at(&self, as_of: DateTime<Utc>) -> bool {
        !self.is_sold() && self.acquisition_date <= as_of
    }

    /// Whether the group was on hand at `as_of`: acquired on or before it and
    /// not yet sold.
    pub fn is_held_at(&self, as_of: DateTime<Utc>) -> bool {
        self.acquisition_date <= as_of
            && self.sale.as_ref().map_or(true, |sale| sale.sold_date > as_of)
    }
}

/// Raw group data as captured at data entry.
///
/// Mirrors the loosely-coupled flags of the entry form. Conversion into a
/// [`LivestockGroup`] is where inconsistent combinations are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LivestockGroupInput {
    pub id: Option<String>,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub category: String,
    pub head_count: i64,
    pub initial_weight: Decimal,
    pub daily_weight_gain: Decimal,
    pub acquisition_date: DateTime<Utc>,
    pub is_breeder: bool,
    pub is_pregnant: bool,
    pub joined_date: Option<DateTime<Utc>>,
    pub calving_rate: Option<Decimal>,
    pub mortality_rate: Option<Decimal>,
    pub saleyard: Option<String>,
    pub state: Option<String>,
    pub is_sold: bool,
    pub sold_date: Option<DateTime<Utc>>,
    pub sold_price: Option<Decimal>,
}

impl LivestockGroupInput {
    /// Validate the entry and build a [`LivestockGroup`].
    ///
    /// Blank calving and mortality rates take the defaults from `preferences`.
    pub fn into_group(self, preferences: &ValuationPreferences) -> Result<LivestockGroup> {
        let species: Species = self
            .species
            .parse()
            .map_err(|_| ValidationError::InvalidInput(format!("unknown species '{}'", self.species)))?;

        let category = self.category.trim().to_string();
        if category.is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }

        if self.head_count < 0 {
            return Err(ValidationError::Negative {
                field: "headCount".to_string(),
                value: Decimal::from(self.head_count),
            }
            .into());
        }
        let head_count = u32::try_from(self.head_count).map_err(|_| {
            ValidationError::InvalidInput(format!("headCount {} is too large", self.head_count))
        })?;

        non_negative("initialWeight", self.initial_weight)?;
        non_negative("dailyWeightGain", self.daily_weight_gain)?;

        let breeding = self.breeding_status(preferences)?;

        let mortality_rate = match self.mortality_rate.or(preferences.default_mortality_rate) {
            Some(rate) => Some(fraction("mortalityRate", rate)?),
            None => None,
        };

        let sale = if self.is_sold {
            let sold_date = self
                .sold_date
                .ok_or_else(|| ValidationError::MissingField("soldDate".to_string()))?;
            let sold_price = self
                .sold_price
                .ok_or_else(|| ValidationError::MissingField("soldPrice".to_string()))?;
            non_negative("soldPrice", sold_price)?;
            Some(SaleRecord {
                sold_date,
                sold_price,
            })
        } else {
            None
        };

        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let name = if self.name.trim().is_empty() {
            format!("{} {}", species, category)
        } else {
            self.name
        };

        Ok(LivestockGroup {
            id,
            name,
            species,
            breed: non_blank(self.breed),
            category,
            head_count,
            initial_weight: self.initial_weight,
            daily_weight_gain: self.daily_weight_gain,
            acquisition_date: self.acquisition_date,
            breeding,
            mortality_rate,
            saleyard: non_blank(self.saleyard),
            state: non_blank(self.state),
            sale,
        })
    }

    fn breeding_status(&self, preferences: &ValuationPreferences) -> Result<BreedingStatus> {
        if !self.is_breeder {
            if self.is_pregnant {
                return Err(ValidationError::InvalidInput(
                    "a pregnant group must be marked as breeders".to_string(),
                )
                .into());
            }
            return Ok(BreedingStatus::NonBreeder);
        }

        let calving_rate = fraction(
            "calvingRate",
            self.calving_rate.unwrap_or(preferences.default_calving_rate),
        )?;

        if !self.is_pregnant {
            return Ok(BreedingStatus::Open { calving_rate });
        }

        let joined_date = self
            .joined_date
            .ok_or_else(|| ValidationError::MissingField("joinedDate".to_string()))?;
        Ok(BreedingStatus::Pregnant {
            joined_date,
            calving_rate,
        })
    }
}

fn non_negative(field: &str, value: Decimal) -> Result<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        }
        .into());
    }
    Ok(value)
}

fn fraction(field: &str, value: Decimal) -> Result<Decimal> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min: Decimal::ZERO,
            max: Decimal::ONE,
        }
        .into());
    }
    Ok(value)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
