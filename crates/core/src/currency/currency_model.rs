use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::formatting::format_money;
use crate::errors::{CurrencyError, Error};

/// Currencies the rebalance table can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayCurrency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl DisplayCurrency {
    pub const ALL: [DisplayCurrency; 3] =
        [DisplayCurrency::Usd, DisplayCurrency::Eur, DisplayCurrency::Gbp];

    pub fn all() -> &'static [DisplayCurrency] {
        &Self::ALL
    }

    pub fn code(&self) -> &'static str {
        match self {
            DisplayCurrency::Usd => "USD",
            DisplayCurrency::Eur => "EUR",
            DisplayCurrency::Gbp => "GBP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DisplayCurrency::Usd => "$",
            DisplayCurrency::Eur => "€",
            DisplayCurrency::Gbp => "£",
        }
    }

    /// Looks up a currency by its ISO code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Result<Self, CurrencyError> {
        let normalized = code.trim();
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| CurrencyError::Unsupported(code.to_string()))
    }

    pub fn info(&self) -> CurrencyInfo {
        CurrencyInfo {
            code: self.code().to_string(),
            symbol: self.symbol().to_string(),
        }
    }

    pub fn format_money(&self, value: f64) -> String {
        format_money(value, *self)
    }
}

impl fmt::Display for DisplayCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DisplayCurrency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s)?)
    }
}

/// Code and symbol pair, as listed to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    pub code: String,
    pub symbol: String,
}
