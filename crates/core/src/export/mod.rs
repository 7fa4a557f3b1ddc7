//! Export of the computed rebalance table.

mod csv_export;

pub use csv_export::{rebalance_to_csv, CSV_HEADERS};
