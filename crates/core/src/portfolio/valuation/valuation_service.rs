use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use log::{debug, warn};
use std::sync::Arc;
use std::time::Instant;

use herdfolio_market_data::{PriceLookup, PriceQuery};

use crate::livestock::LivestockGroup;
use crate::portfolio::valuation::{valuation_calculator, HerdValuation, ResolvedPrice};
use crate::settings::ValuationPreferences;
use crate::utils::time_utils::{valuation_date_from_utc, DEFAULT_VALUATION_TZ};

#[async_trait]
pub trait ValuationServiceTrait: Send + Sync {
    /// Value one group. `as_of` defaults to now.
    async fn calculate_herd_value(
        &self,
        group: &LivestockGroup,
        preferences: &ValuationPreferences,
        as_of: Option<DateTime<Utc>>,
    ) -> HerdValuation;

    /// Value several groups concurrently at the same instant.
    ///
    /// Results come back in input order once every valuation has finished.
    async fn calculate_herd_values(
        &self,
        groups: &[LivestockGroup],
        preferences: &ValuationPreferences,
        as_of: DateTime<Utc>,
    ) -> Vec<HerdValuation>;
}

/// Stateless valuation engine backed by an injected price source.
pub struct ValuationService {
    price_lookup: Arc<dyn PriceLookup>,
}

impl ValuationService {
    pub fn new(price_lookup: Arc<dyn PriceLookup>) -> Self {
        Self { price_lookup }
    }

    /// Resolve the market price for a group, falling back to an "Unknown"
    /// zero price on a miss or a source failure.
    pub async fn resolve_price(
        &self,
        group: &LivestockGroup,
        preferences: &ValuationPreferences,
        as_of: DateTime<Utc>,
    ) -> ResolvedPrice {
        let query = price_query(group, preferences, as_of);
        match self.price_lookup.lookup(&query).await {
            Ok(Some(quote)) => ResolvedPrice::from(quote),
            Ok(None) => {
                warn!(
                    "No price for herd {} ({}), valuing at zero",
                    group.id,
                    query.describe()
                );
                ResolvedPrice::unknown()
            }
            Err(e) => {
                warn!(
                    "Price lookup via {} failed for herd {} ({}): {}. Valuing at zero",
                    self.price_lookup.id(),
                    group.id,
                    query.describe(),
                    e
                );
                ResolvedPrice::unknown()
            }
        }
    }
}

/// Build the lookup key for a group. Group-level saleyard and state override
/// the preference defaults; eligible prices are picked by local valuation date.
pub fn price_query(
    group: &LivestockGroup,
    preferences: &ValuationPreferences,
    as_of: DateTime<Utc>,
) -> PriceQuery {
    PriceQuery::new(group.species, group.category.clone(), as_of)
        .with_price_date(valuation_date_from_utc(as_of, DEFAULT_VALUATION_TZ))
        .with_breed(group.breed.clone())
        .with_state(group.state.clone().or_else(|| preferences.state.clone()))
        .with_saleyard(
            group
                .saleyard
                .clone()
                .or_else(|| preferences.default_saleyard.clone()),
        )
}

#[async_trait]
impl ValuationServiceTrait for ValuationService {
    async fn calculate_herd_value(
        &self,
        group: &LivestockGroup,
        preferences: &ValuationPreferences,
        as_of: Option<DateTime<Utc>>,
    ) -> HerdValuation {
        let as_of = as_of.unwrap_or_else(Utc::now);

        if group.head_count == 0 {
            debug!("Herd {} has no head, skipping price lookup", group.id);
            return HerdValuation::zero(group.id.clone(), as_of);
        }

        let price = self.resolve_price(group, preferences, as_of).await;
        valuation_calculator::calculate_herd_value(group, preferences, &price, as_of)
    }

    async fn calculate_herd_values(
        &self,
        groups: &[LivestockGroup],
        preferences: &ValuationPreferences,
        as_of: DateTime<Utc>,
    ) -> Vec<HerdValuation> {
        let start = Instant::now();
        let valuations = join_all(
            groups
                .iter()
                .map(|group| self.calculate_herd_value(group, preferences, Some(as_of))),
        )
        .await;
        debug!(
            "Valued {} herds as of {} in {:?}",
            valuations.len(),
            as_of,
            start.elapsed()
        );
        valuations
    }
}
