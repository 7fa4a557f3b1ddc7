//! en-US style number formatting for money and percentages.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::DisplayCurrency;

const FRACTION_DIGITS: u32 = 2;

/// Formats `value` as an amount in `currency`, e.g. `-$1,234.50`.
pub fn format_money(value: f64, currency: DisplayCurrency) -> String {
    let (negative, digits) = format_number(value);
    format!(
        "{}{}{}",
        if negative { "-" } else { "" },
        currency.symbol(),
        digits
    )
}

/// Formats a value already expressed in percent, e.g. `80` as `80.00%`.
pub fn format_percentage(value: f64) -> String {
    let (negative, digits) = format_number(value);
    format!("{}{}%", if negative { "-" } else { "" }, digits)
}

/// Sign and grouped digits of `value` rounded to two decimals.
///
/// Rounding works on the shortest decimal representation of the float and
/// goes half away from zero, so `1.005` becomes `1.01`. A value that rounds
/// to zero carries no sign.
fn format_number(value: f64) -> (bool, String) {
    if value.is_nan() {
        return (false, "NaN".to_string());
    }
    if value.is_infinite() {
        return (value < 0.0, "∞".to_string());
    }

    let Some(decimal) = to_decimal(value) else {
        // Outside Decimal's range; fall back to plain float formatting.
        let plain = format!("{:.2}", value.abs());
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
        return (
            value < 0.0,
            format!("{}.{}", group_thousands(int_part), frac_part),
        );
    };

    let rounded =
        decimal.round_dp_with_strategy(FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let mut magnitude = rounded.abs();
    magnitude.rescale(FRACTION_DIGITS);
    let plain = magnitude.to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    (
        negative,
        format!("{}.{}", group_thousands(int_part), frac_part),
    )
}

fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64_retain(value))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
