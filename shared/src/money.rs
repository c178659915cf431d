//! Money helpers using rust_decimal
//!
//! Prices are kept as `Decimal` end to end; no float conversion happens in
//! the domain layer.

use rust_decimal::prelude::*;

/// Rounding for displayed monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value to cents
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum an iterator of prices
pub fn sum_prices<I>(prices: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    prices.into_iter().fold(Decimal::ZERO, |acc, p| acc + p)
}

/// Format an amount as currency, e.g. `$18.98` or `-$1.50`
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = round_money(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{:.2}", rounded.abs())
}
