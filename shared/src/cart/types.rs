//! Cart line item and session state types

use crate::models::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Variant-axis name to chosen value (e.g. "color" -> "red").
///
/// A BTreeMap keeps structural equality independent of the order the
/// axes were selected in, so two identical selections always merge.
pub type VariantSelection = BTreeMap<String, String>;

/// One line in the cart.
///
/// `product` is a snapshot taken at add time; it is never re-fetched,
/// so a stale price persists until the line is removed and re-added.
/// `unit_price` is parsed from the product's display price once, at
/// add time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Engine-generated line id, distinct from the product id
    pub id: String,
    pub product: Product,
    /// Always >= 1; an update that would reach 0 removes the line
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<VariantSelection>,
    pub unit_price: f64,
    pub total_price: f64,
}

impl CartLineItem {
    /// Lookup rule shared by add-merge and quantity queries: same
    /// canonical product id and structurally equal variant selection.
    pub fn matches(&self, product_id: &ProductId, variant: Option<&VariantSelection>) -> bool {
        self.product.id.matches(product_id) && self.selected_variant.as_ref() == variant
    }
}

/// Session cart state.
///
/// `total_items` and `total_amount` are derived: the engine recomputes
/// both with a full fold over `items` after every mutation, so they can
/// never drift from the line data. `is_open` is UI visibility only and
/// is not persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartLineItem>,
    pub total_items: i32,
    pub total_amount: f64,
    pub is_open: bool,
}

impl CartState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
