//! Allocation engine: derives current allocation, buy/sell and buy-only
//! amounts from a list of asset entries.
//!
//! Every function here is pure. The engine accepts any numbers (empty names,
//! negative values, targets outside 0..=100) and never fails; each division
//! is guarded so a zero denominator yields `0` instead of `NaN` or infinity.
//!
//! The buy/sell amount is a single-asset approximation: it is the change in
//! one entry's market value that would give it its target share while every
//! other entry and the total stay where they are. It is not a joint solve
//! across the whole portfolio.

use log::debug;

use super::rebalance_model::{AssetEntry, ComputedAssetEntry, RebalanceTotals};
use crate::constants::TARGET_ALLOCATION_TOTAL;

/// Computes the rebalance table for `entries`, one output row per input row,
/// in input order.
pub fn compute(entries: &[AssetEntry]) -> Vec<ComputedAssetEntry> {
    let total_market_value = entries
        .iter()
        .fold(0.0, |acc, entry| acc + entry.market_value);

    let rows: Vec<ComputedAssetEntry> = entries
        .iter()
        .map(|entry| {
            let current_allocation = current_allocation(entry.market_value, total_market_value);
            let buy_sell = buy_sell(entry, current_allocation);
            ComputedAssetEntry {
                asset: entry.asset.clone(),
                market_value: entry.market_value,
                target_allocation: entry.target_allocation,
                current_allocation,
                buy_sell,
                buy_only: buy_sell,
            }
        })
        .collect();

    let adjustment = buy_only_adjustment(&rows);
    debug!(
        "Computed rebalance for {} entries (total market value {}, buy-only adjustment {})",
        rows.len(),
        total_market_value,
        adjustment
    );

    rows.into_iter()
        .map(|row| ComputedAssetEntry {
            buy_only: row.buy_sell + row.target_allocation * adjustment,
            ..row
        })
        .collect()
}

fn current_allocation(market_value: f64, total_market_value: f64) -> f64 {
    if total_market_value == 0.0 {
        return 0.0;
    }
    (market_value / total_market_value) * 100.0
}

fn buy_sell(entry: &AssetEntry, current_allocation: f64) -> f64 {
    if current_allocation == 0.0 {
        return 0.0;
    }
    (entry.target_allocation * entry.market_value) / current_allocation - entry.market_value
}

/// Largest `|buy_sell / target_allocation|` over the entries that want to
/// sell, floored at zero. Entries with a zero target contribute zero.
fn buy_only_adjustment(rows: &[ComputedAssetEntry]) -> f64 {
    rows.iter()
        .filter(|row| row.buy_sell < 0.0)
        .map(|row| {
            if row.target_allocation == 0.0 {
                0.0
            } else {
                (row.buy_sell / row.target_allocation).abs()
            }
        })
        .fold(0.0, f64::max)
}

/// Sums every numeric column of a computed table.
pub fn column_totals(rows: &[ComputedAssetEntry]) -> RebalanceTotals {
    rows.iter()
        .fold(RebalanceTotals::default(), |totals, row| RebalanceTotals {
            market_value: totals.market_value + row.market_value,
            current_allocation: totals.current_allocation + row.current_allocation,
            target_allocation: totals.target_allocation + row.target_allocation,
            buy_sell: totals.buy_sell + row.buy_sell,
            buy_only: totals.buy_only + row.buy_only,
        })
}

/// Sum of all target allocations, in percent.
pub fn target_allocation_total(entries: &[AssetEntry]) -> f64 {
    entries
        .iter()
        .fold(0.0, |acc, entry| acc + entry.target_allocation)
}

/// True when the target allocations round to exactly 100%.
pub fn is_target_allocation_complete(entries: &[AssetEntry]) -> bool {
    target_allocation_total(entries).round() == TARGET_ALLOCATION_TOTAL
}
