use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;

use crate::errors::{Error, Result};
use crate::rebalance::ComputedAssetEntry;

/// Column headers of the exported table. Edit and delete actions are not exported.
pub const CSV_HEADERS: [&str; 6] = [
    "Asset",
    "Market value",
    "Current allocation",
    "Target allocation",
    "Buy/sell",
    "Buy only",
];

/// Serialises computed rows to CSV, one line per row in table order.
///
/// Values are written raw without currency formatting and every field is
/// quoted. The footer totals are not part of the export.
pub fn rebalance_to_csv(rows: &[ComputedAssetEntry]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.write_record([
            row.asset.clone(),
            row.market_value.to_string(),
            row.current_allocation.to_string(),
            row.target_allocation.to_string(),
            row.buy_sell.to_string(),
            row.buy_only.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    debug!("Exported {} rebalance rows to CSV", rows.len());
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(asset: &str, market_value: f64, buy_sell: f64) -> ComputedAssetEntry {
        ComputedAssetEntry {
            asset: asset.to_string(),
            market_value,
            target_allocation: 50.0,
            current_allocation: 25.5,
            buy_sell,
            buy_only: 0.0,
        }
    }

    #[test]
    fn test_header_only_for_empty_table() {
        let csv = rebalance_to_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "\"Asset\",\"Market value\",\"Current allocation\",\"Target allocation\",\"Buy/sell\",\"Buy only\"\n"
        );
    }

    #[test]
    fn test_rows_are_raw_and_quoted() {
        let csv = rebalance_to_csv(&[row("Stocks", 1234.5, -12.25)]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], r#""Stocks","1234.5","25.5","50","-12.25","0""#);
    }

    #[test]
    fn test_embedded_quotes_and_commas_are_escaped() {
        let csv = rebalance_to_csv(&[row("Fund \"A\", Inc", 1.0, 0.0)]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert!(lines[1].starts_with(r#""Fund ""A"", Inc","1""#));
    }

    #[test]
    fn test_rows_keep_table_order() {
        let csv = rebalance_to_csv(&[row("B", 1.0, 0.0), row("A", 2.0, 0.0)]).unwrap();
        let assets: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap_or_default())
            .collect();

        assert_eq!(assets, vec!["\"B\"", "\"A\""]);
    }
}
