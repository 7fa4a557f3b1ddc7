//! Rebalancer Core - Domain entities, services, and traits.
//!
//! This crate contains the allocation engine and the services around it.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod currency;
pub mod errors;
pub mod export;
pub mod rebalance;
pub mod settings;

// Re-export the rebalance domain for convenience
pub use rebalance::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
