//! Portfolio aggregation service implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use std::sync::Arc;
use std::time::Instant;

use super::summary_cache::SummaryCache;
use super::summary_model::{PortfolioHistoryPoint, PortfolioSummary};
use super::summary_traits::PortfolioServiceTrait;
use crate::errors::{Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::livestock::{LivestockGroup, LivestockRepositoryTrait};
use crate::portfolio::valuation::{HerdValuation, ValuationServiceTrait};
use crate::settings::{SettingsServiceTrait, ValuationPreferences};
use crate::utils::time_utils::{end_of_day_utc, stepped_dates, DEFAULT_VALUATION_TZ};

/// Service for portfolio-level valuation.
pub struct PortfolioService {
    livestock_repository: Arc<dyn LivestockRepositoryTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
    valuation_service: Arc<dyn ValuationServiceTrait>,
    cache: SummaryCache,
}

impl PortfolioService {
    pub fn new(
        livestock_repository: Arc<dyn LivestockRepositoryTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
        valuation_service: Arc<dyn ValuationServiceTrait>,
    ) -> Self {
        Self {
            livestock_repository,
            settings_service,
            valuation_service,
            cache: SummaryCache::new(),
        }
    }

    /// Drop the cached live summary.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate();
    }

    /// Groups held at `as_of`, including ones sold afterwards.
    fn groups_held_at(&self, as_of: DateTime<Utc>) -> Result<Vec<LivestockGroup>> {
        Ok(self
            .livestock_repository
            .list(true)?
            .into_iter()
            .filter(|group| group.is_held_at(as_of))
            .collect())
    }

    /// Groups counted by live aggregation at `now`.
    fn active_groups(&self, now: DateTime<Utc>) -> Result<Vec<LivestockGroup>> {
        Ok(self
            .livestock_repository
            .list(false)?
            .into_iter()
            .filter(|group| group.is_active_at(now))
            .collect())
    }

    async fn summarize(
        &self,
        groups: &[LivestockGroup],
        preferences: &ValuationPreferences,
        as_of: DateTime<Utc>,
    ) -> PortfolioSummary {
        let valuations = self
            .valuation_service
            .calculate_herd_values(groups, preferences, as_of)
            .await;
        PortfolioSummary::from_valuations(as_of, groups, &valuations)
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_herd_valuations(
        &self,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<Vec<HerdValuation>> {
        let preferences = self.settings_service.get_valuation_preferences()?;
        let (groups, as_of) = match as_of {
            Some(as_of) => (self.groups_held_at(as_of)?, as_of),
            None => {
                let now = Utc::now();
                (self.active_groups(now)?, now)
            }
        };
        debug!("Valuing {} herds as of {}", groups.len(), as_of);

        Ok(self
            .valuation_service
            .calculate_herd_values(&groups, &preferences, as_of)
            .await)
    }

    async fn get_portfolio_summary(&self) -> Result<PortfolioSummary> {
        let preferences = self.settings_service.get_valuation_preferences()?;
        if let Some(summary) = self.cache.get(preferences.cache_ttl()) {
            debug!("Portfolio summary served from cache (as of {})", summary.as_of);
            return Ok(summary);
        }

        let generation = self.cache.generation();
        let start = Instant::now();
        let now = Utc::now();
        let groups = self.active_groups(now)?;
        let summary = self.summarize(&groups, &preferences, now).await;

        debug!(
            "Live portfolio summary for {} herds computed in {:?}",
            summary.herd_count,
            start.elapsed()
        );
        if !self.cache.store(generation, summary.clone()) {
            debug!("Portfolio cache invalidated during computation, result not cached");
        }
        Ok(summary)
    }

    async fn get_portfolio_summary_as_of(&self, as_of: DateTime<Utc>) -> Result<PortfolioSummary> {
        let preferences = self.settings_service.get_valuation_preferences()?;
        let groups = self.groups_held_at(as_of)?;
        Ok(self.summarize(&groups, &preferences, as_of).await)
    }

    async fn get_valuation_history(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        step_days: u32,
    ) -> Result<Vec<PortfolioHistoryPoint>> {
        if step_days == 0 {
            return Err(ValidationError::InvalidInput(
                "history step must be at least one day".to_string(),
            )
            .into());
        }
        if start_date > end_date {
            return Err(ValidationError::InvalidInput(format!(
                "history start {} is after end {}",
                start_date, end_date
            ))
            .into());
        }

        let preferences = self.settings_service.get_valuation_preferences()?;
        let all_groups = self.livestock_repository.list(true)?;
        let start = Instant::now();

        let mut history = Vec::new();
        for date in stepped_dates(start_date, end_date, step_days) {
            let as_of = end_of_day_utc(date, DEFAULT_VALUATION_TZ);
            let held: Vec<LivestockGroup> = all_groups
                .iter()
                .filter(|group| group.is_held_at(as_of))
                .cloned()
                .collect();
            let summary = self.summarize(&held, &preferences, as_of).await;
            history.push(PortfolioHistoryPoint::from_summary(date, &summary));
        }

        debug!(
            "Valuation history {}..{} ({} points) computed in {:?}",
            start_date,
            end_date,
            history.len(),
            start.elapsed()
        );
        Ok(history)
    }
}

impl DomainEventSink for PortfolioService {
    fn emit(&self, event: DomainEvent) {
        debug!("Invalidating portfolio cache on {:?}", event);
        self.cache.invalidate();
    }
}
