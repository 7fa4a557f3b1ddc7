use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use rebalancer_core::currency::CurrencyInfo;
use rebalancer_core::{rebalance as core_rebalance, settings as core_settings};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntry {
    pub asset: String,
    pub market_value: f64,
    pub target_allocation: f64,
}

impl From<core_rebalance::AssetEntry> for AssetEntry {
    fn from(e: core_rebalance::AssetEntry) -> Self {
        Self {
            asset: e.asset,
            market_value: e.market_value,
            target_allocation: e.target_allocation,
        }
    }
}

impl From<AssetEntry> for core_rebalance::AssetEntry {
    fn from(e: AssetEntry) -> Self {
        Self {
            asset: e.asset,
            market_value: e.market_value,
            target_allocation: e.target_allocation,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntryUpdate {
    pub asset: String,
    pub market_value: f64,
    pub target_allocation: f64,
}

impl From<AssetEntryUpdate> for core_rebalance::AssetEntryUpdate {
    fn from(u: AssetEntryUpdate) -> Self {
        Self {
            asset: u.asset,
            market_value: u.market_value,
            target_allocation: u.target_allocation,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceRow {
    pub asset: String,
    pub market_value: f64,
    pub target_allocation: f64,
    pub current_allocation: f64,
    pub buy_sell: f64,
    pub buy_only: f64,
}

impl From<core_rebalance::ComputedAssetEntry> for RebalanceRow {
    fn from(r: core_rebalance::ComputedAssetEntry) -> Self {
        Self {
            asset: r.asset,
            market_value: r.market_value,
            target_allocation: r.target_allocation,
            current_allocation: r.current_allocation,
            buy_sell: r.buy_sell,
            buy_only: r.buy_only,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceTotals {
    pub market_value: f64,
    pub current_allocation: f64,
    pub target_allocation: f64,
    pub buy_sell: f64,
    pub buy_only: f64,
}

impl From<core_rebalance::RebalanceTotals> for RebalanceTotals {
    fn from(t: core_rebalance::RebalanceTotals) -> Self {
        Self {
            market_value: t.market_value,
            current_allocation: t.current_allocation,
            target_allocation: t.target_allocation,
            buy_sell: t.buy_sell,
            buy_only: t.buy_only,
        }
    }
}

/// Column totals formatted for display.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceFooter {
    pub market_value: String,
    pub current_allocation: String,
    pub target_allocation: String,
    pub buy_sell: String,
    pub buy_only: String,
}

impl From<core_rebalance::RebalanceFooter> for RebalanceFooter {
    fn from(f: core_rebalance::RebalanceFooter) -> Self {
        Self {
            market_value: f.market_value,
            current_allocation: f.current_allocation,
            target_allocation: f.target_allocation,
            buy_sell: f.buy_sell,
            buy_only: f.buy_only,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceSummary {
    /// ISO code of the display currency.
    pub currency: String,
    pub currency_symbol: String,
    pub rows: Vec<RebalanceRow>,
    pub totals: RebalanceTotals,
    pub footer: RebalanceFooter,
    pub target_allocation_total: f64,
    /// False when target allocations do not round to 100%.
    pub target_allocation_complete: bool,
}

impl From<core_rebalance::RebalanceSummary> for RebalanceSummary {
    fn from(s: core_rebalance::RebalanceSummary) -> Self {
        Self {
            currency: s.currency.code().to_string(),
            currency_symbol: s.currency.symbol().to_string(),
            rows: s.rows.into_iter().map(RebalanceRow::from).collect(),
            totals: s.totals.into(),
            footer: s.footer.into(),
            target_allocation_total: s.target_allocation_total,
            target_allocation_complete: s.target_allocation_complete,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub symbol: String,
}

impl From<CurrencyInfo> for Currency {
    fn from(c: CurrencyInfo) -> Self {
        Self {
            code: c.code,
            symbol: c.symbol,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub display_currency: String,
}

impl From<core_settings::Settings> for Settings {
    fn from(s: core_settings::Settings) -> Self {
        Self {
            display_currency: s.display_currency,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_currency: Option<String>,
}

impl From<SettingsUpdate> for core_settings::SettingsUpdate {
    fn from(u: SettingsUpdate) -> Self {
        Self {
            display_currency: u.display_currency,
        }
    }
}
