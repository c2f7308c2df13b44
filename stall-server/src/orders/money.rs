//! Money calculation using rust_decimal
//!
//! Prices are stored as `f64`; every sum is done in `Decimal` and rounded to
//! 2 places (half away from zero) before it goes back to `f64`.

use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

/// Largest price a menu item may carry
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Largest quantity of one portion size on a single line
pub const MAX_QUANTITY: i64 = 9999;

/// Convert f64 to Decimal; `None` when the value is not representable
#[inline]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round(value).to_f64().unwrap_or_default()
}

#[inline]
fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// price_full × full_qty + price_half × half_qty
///
/// `None` on an unrepresentable price or on overflow.
pub fn line_total(
    price_full: f64,
    price_half: f64,
    full_qty: i64,
    half_qty: i64,
) -> Option<Decimal> {
    let full = to_decimal(price_full)?.checked_mul(Decimal::from(full_qty))?;
    let half = to_decimal(price_half)?.checked_mul(Decimal::from(half_qty))?;
    full.checked_add(half).map(round)
}

/// Format an amount with exactly two decimals ("350.00")
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round(value))
}
