//! Repository traits for settings.

use async_trait::async_trait;

use crate::errors::Result;

/// Repository trait for key/value application settings.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key.
    ///
    /// Returns `Error::Database(DatabaseError::NotFound)` when the key has never been set.
    fn get_setting(&self, setting_key: &str) -> Result<String>;

    /// Update a single setting.
    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;

    /// Remove a setting so that its default applies again.
    async fn delete_setting(&self, setting_key: &str) -> Result<()>;
}
