use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::allocation_engine;
use super::rebalance_model::{
    AssetEntry, AssetEntryUpdate, RebalanceFooter, RebalanceSummary,
};
use super::rebalance_traits::{AssetEntryRepositoryTrait, RebalanceServiceTrait};
use crate::currency::DisplayCurrency;
use crate::errors::{Error, Result};
use crate::export;

pub struct RebalanceService {
    repository: Arc<dyn AssetEntryRepositoryTrait>,
    // Serialises load-modify-save cycles so concurrent edits are not lost.
    mutation_lock: Mutex<()>,
}

impl RebalanceService {
    pub fn new(repository: Arc<dyn AssetEntryRepositoryTrait>) -> Self {
        Self {
            repository,
            mutation_lock: Mutex::new(()),
        }
    }

    async fn mutate<F>(&self, change: F) -> Result<Vec<AssetEntry>>
    where
        F: FnOnce(&mut Vec<AssetEntry>) -> Result<()> + Send,
    {
        let _guard = self.mutation_lock.lock().await;
        let mut entries = self.repository.load_entries()?;
        change(&mut entries)?;
        self.repository.save_entries(entries.clone()).await?;
        Ok(entries)
    }
}

fn entry_not_found(index: usize, len: usize) -> Error {
    Error::NotFound(format!(
        "Asset entry {} does not exist (list has {} entries)",
        index, len
    ))
}

#[async_trait]
impl RebalanceServiceTrait for RebalanceService {
    fn get_entries(&self) -> Result<Vec<AssetEntry>> {
        self.repository.load_entries()
    }

    async fn add_entry(&self) -> Result<Vec<AssetEntry>> {
        self.mutate(|entries| {
            entries.push(AssetEntry::default());
            Ok(())
        })
        .await
    }

    async fn update_entry(
        &self,
        index: usize,
        update: AssetEntryUpdate,
    ) -> Result<Vec<AssetEntry>> {
        update.validate()?;
        self.mutate(move |entries| {
            let len = entries.len();
            let slot = entries
                .get_mut(index)
                .ok_or_else(|| entry_not_found(index, len))?;
            *slot = update.into();
            Ok(())
        })
        .await
    }

    async fn delete_entry(&self, index: usize) -> Result<Vec<AssetEntry>> {
        self.mutate(move |entries| {
            if index >= entries.len() {
                return Err(entry_not_found(index, entries.len()));
            }
            entries.remove(index);
            Ok(())
        })
        .await
    }

    async fn replace_entries(&self, entries: Vec<AssetEntry>) -> Result<Vec<AssetEntry>> {
        debug!("Replacing asset list with {} imported entries", entries.len());
        self.mutate(move |current| {
            *current = entries;
            Ok(())
        })
        .await
    }

    fn get_rebalance(&self, currency: DisplayCurrency) -> Result<RebalanceSummary> {
        let entries = self.repository.load_entries()?;
        let rows = allocation_engine::compute(&entries);
        let totals = allocation_engine::column_totals(&rows);
        let target_allocation_total = allocation_engine::target_allocation_total(&entries);
        let target_allocation_complete = allocation_engine::is_target_allocation_complete(&entries);

        if !entries.is_empty() && !target_allocation_complete {
            warn!(
                "Target allocations sum to {:.2}%, expected 100%",
                target_allocation_total
            );
        }

        Ok(RebalanceSummary {
            currency,
            footer: RebalanceFooter::from_totals(&totals, currency),
            rows,
            totals,
            target_allocation_total,
            target_allocation_complete,
        })
    }

    fn export_csv(&self) -> Result<String> {
        let entries = self.repository.load_entries()?;
        let rows = allocation_engine::compute(&entries);
        export::rebalance_to_csv(&rows)
    }
}
