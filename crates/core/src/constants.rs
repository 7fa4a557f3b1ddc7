/// Sum of target allocations (in percent) a complete plan should reach.
pub const TARGET_ALLOCATION_TOTAL: f64 = 100.0;

/// Display currency used when none has been selected yet.
pub const DEFAULT_DISPLAY_CURRENCY: &str = "USD";

/// Settings key holding the selected display currency.
pub const DISPLAY_CURRENCY_SETTING_KEY: &str = "display_currency";

/// File name offered for the CSV export.
pub const EXPORT_FILE_NAME: &str = "rebalance.csv";
