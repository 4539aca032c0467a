//! Money helpers.
//!
//! Amounts are rupee values carried as [`Decimal`] so tax arithmetic is
//! exact. There is a single fixed GST rate; it is not configurable.

use rust_decimal::{Decimal, RoundingStrategy};

/// GST applied to every cart: 18%.
pub const GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Round a rupee amount to paise (two decimal places), half away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The GST portion for a subtotal, rounded to paise.
#[must_use]
pub fn gst(subtotal: Decimal) -> Decimal {
    round_money(subtotal * GST_RATE)
}

/// A subtotal with GST applied, rounded to paise.
///
/// Computed as `subtotal × 1.18` in one step rather than `subtotal +
/// gst(subtotal)`, so the grand total never drifts a paisa from the rate.
#[must_use]
pub fn with_gst(subtotal: Decimal) -> Decimal {
    round_money(subtotal * (Decimal::ONE + GST_RATE))
}
