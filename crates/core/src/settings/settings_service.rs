use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::constants::DISPLAY_CURRENCY_SETTING_KEY;
use crate::currency::DisplayCurrency;
use crate::errors::{DatabaseError, Error, Result};
use crate::settings::{Settings, SettingsUpdate};

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        self.settings_repository.get_settings()
    }

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<Settings> {
        let mut normalized = new_settings.clone();

        if let Some(ref code) = new_settings.display_currency {
            let currency = DisplayCurrency::from_code(code)?;
            debug!("Switching display currency to {}", currency);
            normalized.display_currency = Some(currency.code().to_string());
        }

        self.settings_repository
            .update_settings(&normalized)
            .await?;
        self.settings_repository.get_settings()
    }

    fn get_display_currency(&self) -> Result<DisplayCurrency> {
        match self
            .settings_repository
            .get_setting(DISPLAY_CURRENCY_SETTING_KEY)
        {
            Ok(value) => Ok(DisplayCurrency::from_code(&value).unwrap_or_else(|_| {
                warn!(
                    "Stored display currency '{}' is not supported, using {}",
                    value,
                    DisplayCurrency::default()
                );
                DisplayCurrency::default()
            })),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(DisplayCurrency::default()),
            Err(e) => Err(e),
        }
    }
}
