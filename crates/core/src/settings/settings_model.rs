//! Valuation preference models.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_TTL_SECS, DEFAULT_CALVING_RATE};
use crate::errors::Result;

/// Setting keys backing [`ValuationPreferences`].
pub mod keys {
    pub const COST_PER_HEAD_PER_DAY: &str = "cost_per_head_per_day";
    pub const DEFAULT_SALEYARD: &str = "default_saleyard";
    pub const STATE: &str = "state";
    pub const DEFAULT_CALVING_RATE: &str = "default_calving_rate";
    pub const DEFAULT_MORTALITY_RATE: &str = "default_mortality_rate";
    pub const CACHE_TTL_SECS: &str = "valuation_cache_ttl_secs";
}

/// User preferences consumed by the valuation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationPreferences {
    /// Holding cost per head per day (feed, agistment, labour)
    pub cost_per_head_per_day: Decimal,
    /// Saleyard used when a group has no saleyard of its own
    pub default_saleyard: Option<String>,
    /// Farm state or territory, used for state indicator prices
    pub state: Option<String>,
    /// Calving rate applied to breeders entered without one
    pub default_calving_rate: Decimal,
    /// Annual mortality applied to groups entered without one
    pub default_mortality_rate: Option<Decimal>,
    /// How long a cached portfolio summary is served before recomputing
    pub cache_ttl_secs: u64,
}

impl Default for ValuationPreferences {
    fn default() -> Self {
        Self {
            cost_per_head_per_day: Decimal::ZERO,
            default_saleyard: None,
            state: None,
            default_calving_rate: DEFAULT_CALVING_RATE,
            default_mortality_rate: None,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl ValuationPreferences {
    /// Parse preferences from a JSON document. Absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
