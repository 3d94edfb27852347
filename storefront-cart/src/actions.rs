//! Cart actions

use shared::cart::{CartLineItem, VariantSelection};
use shared::models::Product;

/// Mutations accepted by the cart reducer.
///
/// Unknown line-item ids in `UpdateQuantity`/`RemoveItem` are silent
/// no-ops: they are reachable only through stale UI references, not
/// user-facing misuse.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add a product, merging into an existing line when the product id
    /// and variant selection both match.
    AddItem {
        product: Product,
        quantity: i32,
        variant: Option<VariantSelection>,
    },
    /// Set a line's quantity; `quantity <= 0` behaves exactly as
    /// `RemoveItem`.
    UpdateQuantity { id: String, quantity: i32 },
    RemoveItem { id: String },
    ClearCart,
    /// Flip the cart sidebar visibility; contents untouched.
    ToggleCart,
    /// Replace the item list wholesale (rehydration from storage).
    LoadCart { items: Vec<CartLineItem> },
}
