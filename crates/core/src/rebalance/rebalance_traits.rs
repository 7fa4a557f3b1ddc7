use async_trait::async_trait;

use crate::currency::DisplayCurrency;
use crate::errors::Result;

use super::rebalance_model::{AssetEntry, AssetEntryUpdate, RebalanceSummary};

/// Repository trait for the persisted asset list.
///
/// The list is stored verbatim and in order; implementations never validate
/// or reorder entries.
#[async_trait]
pub trait AssetEntryRepositoryTrait: Send + Sync {
    /// Loads the stored list, or an empty list when nothing has been saved.
    fn load_entries(&self) -> Result<Vec<AssetEntry>>;

    /// Replaces the stored list with `entries`. Returns the number of rows written.
    async fn save_entries(&self, entries: Vec<AssetEntry>) -> Result<usize>;
}

/// Trait for rebalance service operations
#[async_trait]
pub trait RebalanceServiceTrait: Send + Sync {
    fn get_entries(&self) -> Result<Vec<AssetEntry>>;

    /// Appends a blank entry and returns the updated list.
    async fn add_entry(&self) -> Result<Vec<AssetEntry>>;

    /// Commits a row edit at `index` and returns the updated list.
    async fn update_entry(&self, index: usize, update: AssetEntryUpdate)
        -> Result<Vec<AssetEntry>>;

    async fn delete_entry(&self, index: usize) -> Result<Vec<AssetEntry>>;

    /// Stores an imported snapshot as-is and returns it.
    async fn replace_entries(&self, entries: Vec<AssetEntry>) -> Result<Vec<AssetEntry>>;

    fn get_rebalance(&self, currency: DisplayCurrency) -> Result<RebalanceSummary>;

    /// Computed table as CSV text.
    fn export_csv(&self) -> Result<String>;
}
