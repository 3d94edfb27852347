//! Checkout presentation formulas
//!
//! Shipping and tax are derived from the cart subtotal by the checkout
//! page; they are consumer-side formulas, not cart engine state.

use crate::money::{to_decimal, to_f64};
use rust_decimal::Decimal;

/// Orders at or above this subtotal ship free
pub const FREE_SHIPPING_THRESHOLD: f64 = 5_000.0;

/// Flat shipping fee below the threshold
pub const FLAT_SHIPPING_FEE: f64 = 150.0;

/// VAT rate (0.16 = 16%)
const VAT_RATE: Decimal = Decimal::from_parts(16, 0, 0, false, 2);

/// Shipping fee for a subtotal: flat below the threshold, free at or
/// above it.
pub fn shipping(subtotal: f64) -> f64 {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        0.0
    } else {
        FLAT_SHIPPING_FEE
    }
}

/// VAT on a subtotal.
pub fn tax(subtotal: f64) -> f64 {
    to_f64(to_decimal(subtotal) * VAT_RATE)
}

/// Order total: subtotal + shipping + tax.
pub fn order_total(subtotal: f64) -> f64 {
    let total = to_decimal(subtotal) + to_decimal(shipping(subtotal)) + to_decimal(tax(subtotal));
    to_f64(total)
}
