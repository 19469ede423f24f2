use super::SettingsRepositoryTrait;
use crate::errors::{DatabaseError, Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::settings::{keys, ValuationPreferences};
use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

// Define the trait for SettingsService
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Load valuation preferences, falling back to defaults for unset keys.
    fn get_valuation_preferences(&self) -> Result<ValuationPreferences>;

    /// Persist valuation preferences and announce the change.
    async fn update_valuation_preferences(&self, preferences: &ValuationPreferences) -> Result<()>;

    /// Get a single setting value by key. Returns None if not found.
    fn get_setting_value(&self, key: &str) -> Result<Option<String>>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_valuation_preferences(&self) -> Result<ValuationPreferences> {
        let defaults = ValuationPreferences::default();

        let cost_per_head_per_day = self
            .read_decimal(keys::COST_PER_HEAD_PER_DAY)?
            .unwrap_or(defaults.cost_per_head_per_day);
        let default_calving_rate = self
            .read_decimal(keys::DEFAULT_CALVING_RATE)?
            .unwrap_or(defaults.default_calving_rate);
        let default_mortality_rate = self.read_decimal(keys::DEFAULT_MORTALITY_RATE)?;
        let cache_ttl_secs = match self.read_non_blank(keys::CACHE_TTL_SECS)? {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                Error::InvalidConfigValue(format!("{}='{}': {}", keys::CACHE_TTL_SECS, raw, e))
            })?,
            None => defaults.cache_ttl_secs,
        };

        Ok(ValuationPreferences {
            cost_per_head_per_day,
            default_saleyard: self.read_non_blank(keys::DEFAULT_SALEYARD)?,
            state: self.read_non_blank(keys::STATE)?,
            default_calving_rate,
            default_mortality_rate,
            cache_ttl_secs,
        })
    }

    async fn update_valuation_preferences(&self, preferences: &ValuationPreferences) -> Result<()> {
        self.settings_repository
            .update_setting(
                keys::COST_PER_HEAD_PER_DAY,
                &preferences.cost_per_head_per_day.to_string(),
            )
            .await?;
        self.settings_repository
            .update_setting(
                keys::DEFAULT_CALVING_RATE,
                &preferences.default_calving_rate.to_string(),
            )
            .await?;
        self.settings_repository
            .update_setting(keys::CACHE_TTL_SECS, &preferences.cache_ttl_secs.to_string())
            .await?;
        self.write_optional(keys::DEFAULT_SALEYARD, preferences.default_saleyard.clone())
            .await?;
        self.write_optional(keys::STATE, preferences.state.clone())
            .await?;
        self.write_optional(
            keys::DEFAULT_MORTALITY_RATE,
            preferences.default_mortality_rate.map(|r| r.to_string()),
        )
        .await?;

        debug!("Valuation preferences updated: {:?}", preferences);
        self.event_sink.emit(DomainEvent::PreferencesChanged);
        Ok(())
    }

    fn get_setting_value(&self, key: &str) -> Result<Option<String>> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl SettingsService {
    pub fn new(
        settings_repository: Arc<dyn SettingsRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        SettingsService {
            settings_repository,
            event_sink,
        }
    }

    fn read_non_blank(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .get_setting_value(key)?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()))
    }

    fn read_decimal(&self, key: &str) -> Result<Option<Decimal>> {
        match self.read_non_blank(key)? {
            Some(raw) => Decimal::from_str(&raw)
                .map(Some)
                .map_err(|e| Error::InvalidConfigValue(format!("{}='{}': {}", key, raw, e))),
            None => Ok(None),
        }
    }

    async fn write_optional(&self, key: &str, value: Option<String>) -> Result<()> {
        match value {
            Some(v) => self.settings_repository.update_setting(key, &v).await,
            None => self.settings_repository.delete_setting(key).await,
        }
    }
}
