//! Display currencies and number formatting.
//!
//! The selected currency is a label for display only; amounts are never
//! converted between currencies.

mod currency_model;
mod formatting;

pub use currency_model::{CurrencyInfo, DisplayCurrency};
pub use formatting::{format_money, format_percentage};
