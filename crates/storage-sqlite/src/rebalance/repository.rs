use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::AssetEntryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::asset_entries;
use rebalancer_core::errors::Result;
use rebalancer_core::rebalance::AssetEntryRepositoryTrait;
use rebalancer_core::AssetEntry;

pub struct AssetEntryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AssetEntryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AssetEntryRepository { pool, writer }
    }
}

#[async_trait]
impl AssetEntryRepositoryTrait for AssetEntryRepository {
    fn load_entries(&self) -> Result<Vec<AssetEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = asset_entries::table
            .select(AssetEntryDB::as_select())
            .order(asset_entries::position.asc())
            .load::<AssetEntryDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(AssetEntry::from).collect())
    }

    async fn save_entries(&self, entries: Vec<AssetEntry>) -> Result<usize> {
        let rows = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| AssetEntryDB::from_entry(index, entry))
            .collect::<Result<Vec<_>>>()?;

        self.writer
            .exec(move |conn| {
                diesel::delete(asset_entries::table)
                    .execute(conn)
                    .into_core()?;
                if rows.is_empty() {
                    return Ok(0);
                }
                let written = diesel::insert_into(asset_entries::table)
                    .values(&rows)
                    .execute(conn)
                    .into_core()?;
                debug!("Saved {} asset entries", written);
                Ok(written)
            })
            .await
    }
}
