//! Cart types
//!
//! Line items and session state owned by the cart engine. The engine
//! itself (reducer, totals, persistence) lives in `storefront-cart`.

mod types;

pub use types::{CartLineItem, CartState, VariantSelection};
