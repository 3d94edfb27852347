//! Cart reducer
//!
//! Pure state transitions over [`CartState`]. Every mutating arm ends
//! with a full totals recompute via [`money::recalculate_totals`], so
//! the derived `total_items`/`total_amount` hold after every step.
//! Persistence is the store's concern, not the reducer's.

use crate::actions::CartAction;
use crate::money;
use shared::cart::{CartLineItem, CartState, VariantSelection};
use shared::models::{Product, ProductId};
use tracing::debug;
use uuid::Uuid;

/// Apply one action to the state.
pub fn reduce(state: &mut CartState, action: CartAction) {
    match action {
        CartAction::AddItem {
            product,
            quantity,
            variant,
        } => add_item(state, product, quantity, variant),
        CartAction::UpdateQuantity { id, quantity } => update_quantity(state, &id, quantity),
        CartAction::RemoveItem { id } => remove_item(state, &id),
        CartAction::ClearCart => {
            state.items.clear();
            money::recalculate_totals(state);
        }
        CartAction::ToggleCart => state.is_open = !state.is_open,
        CartAction::LoadCart { items } => {
            state.items = items;
            money::recalculate_totals(state);
        }
    }
}

/// Read-only lookup by the same matching rule as add-merge.
pub fn quantity_of(
    state: &CartState,
    product_id: &ProductId,
    variant: Option<&VariantSelection>,
) -> i32 {
    state
        .items
        .iter()
        .find(|item| item.matches(product_id, variant))
        .map(|item| item.quantity)
        .unwrap_or(0)
}

fn add_item(
    state: &mut CartState,
    product: Product,
    quantity: i32,
    variant: Option<VariantSelection>,
) {
    if quantity <= 0 {
        debug!(product_id = %product.id, quantity, "ignoring add with non-positive quantity");
        return;
    }

    if let Some(existing) = state
        .items
        .iter_mut()
        .find(|item| item.matches(&product.id, variant.as_ref()))
    {
        // Additive merge: N adds of 1 equal one add of N
        existing.quantity += quantity;
        existing.total_price = money::line_total(existing.unit_price, existing.quantity);
    } else {
        let unit_price = money::parse_display_price(&product.price);
        state.items.push(CartLineItem {
            id: Uuid::new_v4().to_string(),
            total_price: money::line_total(unit_price, quantity),
            product,
            quantity,
            selected_variant: variant,
            unit_price,
        });
    }

    money::recalculate_totals(state);
}

fn update_quantity(state: &mut CartState, id: &str, quantity: i32) {
    // No zero-quantity line is representable
    if quantity <= 0 {
        remove_item(state, id);
        return;
    }

    match state.items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.quantity = quantity;
            item.total_price = money::line_total(item.unit_price, item.quantity);
            money::recalculate_totals(state);
        }
        None => debug!(line_id = %id, "quantity update for unknown line ignored"),
    }
}

fn remove_item(state: &mut CartState, id: &str) {
    let before = state.items.len();
    state.items.retain(|item| item.id != id);

    if state.items.len() == before {
        debug!(line_id = %id, "remove for unknown line ignored");
        return;
    }
    money::recalculate_totals(state);
}
