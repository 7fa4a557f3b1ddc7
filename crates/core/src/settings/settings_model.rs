use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DISPLAY_CURRENCY;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub display_currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_currency: DEFAULT_DISPLAY_CURRENCY.to_string(),
        }
    }
}

/// Partial update; `None` leaves a setting untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub display_currency: Option<String>,
}
