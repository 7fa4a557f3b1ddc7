//! Unit tests for the settings service.

use super::*;
use crate::currency::DisplayCurrency;
use crate::errors::{CurrencyError, DatabaseError, Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct MockSettingsRepository {
    values: RwLock<HashMap<String, String>>,
}

impl MockSettingsRepository {
    fn with_value(key: &str, value: &str) -> Self {
        let repository = Self::default();
        repository
            .values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        repository
    }
}

#[async_trait]
impl SettingsRepositoryTrait for MockSettingsRepository {
    fn get_settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();
        if let Some(value) = self.values.read().unwrap().get("display_currency") {
            settings.display_currency = value.clone();
        }
        Ok(settings)
    }

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()> {
        if let Some(ref value) = new_settings.display_currency {
            self.values
                .write()
                .unwrap()
                .insert("display_currency".to_string(), value.clone());
        }
        Ok(())
    }

    fn get_setting(&self, setting_key: &str) -> Result<String> {
        self.values
            .read()
            .unwrap()
            .get(setting_key)
            .cloned()
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(setting_key.to_string())))
    }
}

#[test]
fn test_defaults_to_usd() {
    let service = SettingsService::new(Arc::new(MockSettingsRepository::default()));

    assert_eq!(service.get_settings().unwrap().display_currency, "USD");
    assert_eq!(service.get_display_currency().unwrap(), DisplayCurrency::Usd);
}

#[tokio::test]
async fn test_update_normalizes_currency_code() {
    let repository = Arc::new(MockSettingsRepository::default());
    let service = SettingsService::new(repository.clone());

    let settings = service
        .update_settings(&SettingsUpdate {
            display_currency: Some(" eur".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(settings.display_currency, "EUR");
    assert_eq!(repository.get_setting("display_currency").unwrap(), "EUR");
    assert_eq!(service.get_display_currency().unwrap(), DisplayCurrency::Eur);
}

#[tokio::test]
async fn test_update_rejects_unsupported_currency() {
    let repository = Arc::new(MockSettingsRepository::default());
    let service = SettingsService::new(repository.clone());

    let result = service
        .update_settings(&SettingsUpdate {
            display_currency: Some("JPY".to_string()),
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::Currency(CurrencyError::Unsupported(_)))
    ));
    assert!(repository.get_setting("display_currency").is_err());
}

#[tokio::test]
async fn test_empty_update_keeps_settings() {
    let repository = Arc::new(MockSettingsRepository::with_value("display_currency", "GBP"));
    let service = SettingsService::new(repository);

    let settings = service
        .update_settings(&SettingsUpdate::default())
        .await
        .unwrap();

    assert_eq!(settings.display_currency, "GBP");
}

#[test]
fn test_invalid_stored_currency_falls_back_to_default() {
    let repository = Arc::new(MockSettingsRepository::with_value("display_currency", "XYZ"));
    let service = SettingsService::new(repository);

    assert_eq!(service.get_display_currency().unwrap(), DisplayCurrency::Usd);
}
