//! Repository and service traits for settings.

use async_trait::async_trait;

use crate::currency::DisplayCurrency;
use crate::errors::Result;
use crate::settings::{Settings, SettingsUpdate};

/// Repository trait for managing application settings.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get all settings, with defaults for keys never written.
    fn get_settings(&self) -> Result<Settings>;

    /// Update multiple settings at once.
    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()>;

    /// Get a single setting value by key.
    fn get_setting(&self, setting_key: &str) -> Result<String>;
}

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<Settings>;

    /// The persisted display currency, or the default when unset or unreadable.
    fn get_display_currency(&self) -> Result<DisplayCurrency>;
}
