//! SQLite storage implementation for the asset list.

mod model;
mod repository;

pub use model::AssetEntryDB;
pub use repository::AssetEntryRepository;

// Re-export trait from core for convenience
pub use rebalancer_core::rebalance::AssetEntryRepositoryTrait;
