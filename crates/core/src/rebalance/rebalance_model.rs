//! Rebalance domain models.

use serde::{Deserialize, Serialize};

use crate::currency::DisplayCurrency;
use crate::errors::{Error, Result, ValidationError};

/// One row of the user's portfolio as entered and persisted.
///
/// `market_value` is expressed in the active display currency and
/// `target_allocation` in percent of the whole portfolio. Neither is clamped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntry {
    pub asset: String,
    pub market_value: f64,
    pub target_allocation: f64,
}

impl AssetEntry {
    pub fn new(asset: impl Into<String>, market_value: f64, target_allocation: f64) -> Self {
        Self {
            asset: asset.into(),
            market_value,
            target_allocation,
        }
    }
}

/// Input model for committing a row edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntryUpdate {
    pub asset: String,
    pub market_value: f64,
    pub target_allocation: f64,
}

impl AssetEntryUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.asset.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "asset".to_string(),
            )));
        }
        Ok(())
    }
}

impl From<AssetEntryUpdate> for AssetEntry {
    fn from(update: AssetEntryUpdate) -> Self {
        Self {
            asset: update.asset,
            market_value: update.market_value,
            target_allocation: update.target_allocation,
        }
    }
}

/// An asset entry together with the values derived from the whole list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComputedAssetEntry {
    pub asset: String,
    pub market_value: f64,
    pub target_allocation: f64,
    /// Share of the total market value, in percent.
    pub current_allocation: f64,
    /// Signed change in market value that reaches the target share.
    pub buy_sell: f64,
    /// `buy_sell` shifted so that nothing has to be sold.
    pub buy_only: f64,
}

/// Column sums over a computed table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceTotals {
    pub market_value: f64,
    pub current_allocation: f64,
    pub target_allocation: f64,
    pub buy_sell: f64,
    pub buy_only: f64,
}

/// Column sums formatted for the display currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceFooter {
    pub market_value: String,
    pub current_allocation: String,
    pub target_allocation: String,
    pub buy_sell: String,
    pub buy_only: String,
}

impl RebalanceFooter {
    pub fn from_totals(totals: &RebalanceTotals, currency: DisplayCurrency) -> Self {
        Self {
            market_value: currency.format_money(totals.market_value),
            current_allocation: crate::currency::format_percentage(totals.current_allocation),
            target_allocation: crate::currency::format_percentage(totals.target_allocation),
            buy_sell: currency.format_money(totals.buy_sell),
            buy_only: currency.format_money(totals.buy_only),
        }
    }
}

/// Everything a client needs to render the rebalance table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceSummary {
    pub currency: DisplayCurrency,
    pub rows: Vec<ComputedAssetEntry>,
    pub totals: RebalanceTotals,
    pub footer: RebalanceFooter,
    pub target_allocation_total: f64,
    /// False when the targets do not round to 100%. Advisory only.
    pub target_allocation_complete: bool,
}
