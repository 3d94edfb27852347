//! Money helpers using rust_decimal for precision
//!
//! All folds over monetary values are done with `Decimal` internally,
//! then converted back to `f64` for storage/serialization.

use rust_decimal::prelude::*;
use shared::cart::CartState;

// The display-price stripping rule lives next to the Product model
pub use shared::models::product::parse_display_price;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.round_dp(DECIMAL_PLACES).to_f64().unwrap_or(0.0)
}

/// Line total: unit price x quantity, rounded to 2 places.
pub fn line_total(unit_price: f64, quantity: i32) -> f64 {
    to_f64(to_decimal(unit_price) * Decimal::from(quantity))
}

/// Recompute both derived totals with a full fold over the items.
///
/// Totals are never incrementally patched; the fold runs after every
/// mutation so stored and derived values cannot drift.
pub fn recalculate_totals(state: &mut CartState) {
    state.total_items = state.items.iter().map(|item| item.quantity).sum();

    let amount = state
        .items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc + to_decimal(item.total_price));
    state.total_amount = to_f64(amount);
}
