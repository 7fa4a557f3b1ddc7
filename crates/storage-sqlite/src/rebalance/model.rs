//! Database model for asset entries.

use diesel::prelude::*;
use rebalancer_core::errors::{Error, Result, ValidationError};
use rebalancer_core::AssetEntry;

/// One stored row; `position` is the entry's index in the list.
#[derive(Queryable, Selectable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::asset_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetEntryDB {
    pub position: i32,
    pub asset: String,
    pub market_value: f64,
    pub target_allocation: f64,
}

impl AssetEntryDB {
    pub fn from_entry(index: usize, entry: &AssetEntry) -> Result<Self> {
        let position = i32::try_from(index).map_err(|_| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Asset list position {} is out of range",
                index
            )))
        })?;
        Ok(Self {
            position,
            asset: entry.asset.clone(),
            market_value: entry.market_value,
            target_allocation: entry.target_allocation,
        })
    }
}

impl From<AssetEntryDB> for AssetEntry {
    fn from(db: AssetEntryDB) -> Self {
        AssetEntry {
            asset: db.asset,
            market_value: db.market_value,
            target_allocation: db.target_allocation,
        }
    }
}
