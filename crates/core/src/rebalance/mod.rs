//! Rebalance module - asset entries, the allocation engine, and the service
//! that owns the persisted asset list.

pub mod allocation_engine;
mod rebalance_model;
mod rebalance_service;
mod rebalance_traits;


pub use allocation_engine::{
    column_totals, compute, is_target_allocation_complete, target_allocation_total,
};
pub use rebalance_model::{
    AssetEntry, AssetEntryUpdate, ComputedAssetEntry, RebalanceFooter, RebalanceSummary,
    RebalanceTotals,
};
pub use rebalance_service::RebalanceService;
pub use rebalance_traits::{AssetEntryRepositoryTrait, RebalanceServiceTrait};
