//! Cart store
//!
//! The owned engine instance: construct one per browsing session with
//! an explicit storage handle and config — no module-level state. All
//! mutations go through [`reducer::reduce`]; item-changing actions are
//! persisted inside the same call, so the saved cart trails in-memory
//! state by at most the current mutation.

use crate::actions::CartAction;
use crate::reducer;
use crate::storage::CartStorage;
use shared::cart::{CartLineItem, CartState, VariantSelection};
use shared::models::{Product, ProductId};
use tracing::{debug, warn};

/// Default storage scope key
pub const DEFAULT_STORAGE_KEY: &str = "storefront-cart";

/// Cart engine configuration
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Key the cart is saved under in the local store
    pub storage_key: String,
    /// Delete the saved cart when the user signs out
    pub clear_persisted_on_sign_out: bool,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            clear_persisted_on_sign_out: true,
        }
    }
}

/// Cart engine with persistence
pub struct CartStore {
    state: CartState,
    storage: CartStorage,
    config: CartConfig,
}

impl CartStore {
    /// Create a store, rehydrating any previously saved cart.
    pub fn new(storage: CartStorage, config: CartConfig) -> Self {
        let mut state = CartState::default();

        let items = storage.load(&config.storage_key);
        if !items.is_empty() {
            debug!(count = items.len(), "rehydrating saved cart");
            reducer::reduce(&mut state, CartAction::LoadCart { items });
        }

        Self {
            state,
            storage,
            config,
        }
    }

    // ==================== Mutations ====================

    /// Add a product to the cart (additive merge by product id +
    /// variant selection).
    pub fn add_item(
        &mut self,
        product: Product,
        quantity: i32,
        variant: Option<VariantSelection>,
    ) {
        self.apply(CartAction::AddItem {
            product,
            quantity,
            variant,
        });
    }

    /// Set a line's quantity; zero or below removes the line. Unknown
    /// ids are ignored.
    pub fn update_quantity(&mut self, id: &str, quantity: i32) {
        self.apply(CartAction::UpdateQuantity {
            id: id.to_string(),
            quantity,
        });
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: &str) {
        self.apply(CartAction::RemoveItem { id: id.to_string() });
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.apply(CartAction::ClearCart);
    }

    /// Flip the sidebar visibility flag. Not persisted.
    pub fn toggle_cart(&mut self) {
        reducer::reduce(&mut self.state, CartAction::ToggleCart);
    }

    /// Sign-out hook. When configured to, forgets both the in-memory
    /// and the saved cart; otherwise the cart survives the identity
    /// change untouched.
    pub fn handle_sign_out(&mut self) {
        if !self.config.clear_persisted_on_sign_out {
            debug!("sign-out: cart retention configured, keeping cart");
            return;
        }

        reducer::reduce(&mut self.state, CartAction::ClearCart);
        if let Err(err) = self.storage.delete(&self.config.storage_key) {
            warn!(error = %err, "failed to delete saved cart on sign-out");
        }
    }

    // ==================== Reads ====================

    /// Quantity currently in the cart for a product + variant, by the
    /// same matching rule adds merge with. 0 if absent.
    pub fn quantity_of(
        &self,
        product_id: &ProductId,
        variant: Option<&VariantSelection>,
    ) -> i32 {
        reducer::quantity_of(&self.state, product_id, variant)
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.state.items
    }

    pub fn total_items(&self) -> i32 {
        self.state.total_items
    }

    pub fn total_amount(&self) -> f64 {
        self.state.total_amount
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    // ==================== Internals ====================

    fn apply(&mut self, action: CartAction) {
        reducer::reduce(&mut self.state, action);
        self.persist();
    }

    /// Write the current items through to storage. A failed write is
    /// logged and the in-memory mutation stands.
    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.config.storage_key, &self.state.items) {
            warn!(error = %err, "failed to persist cart");
        }
    }
}
