//! Application settings: the persisted display currency.

mod settings_model;
mod settings_service;
mod settings_traits;

#[cfg(test)]
mod settings_service_tests;

pub use settings_model::{Settings, SettingsUpdate};
pub use settings_service::SettingsService;
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
