//! Shared types for the storefront workspace
//!
//! Data models exchanged between the cart engine and the catalog
//! client: products, categories, cart line items, and the paginated
//! response envelope returned by the catalog API.

pub mod cart;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{CartLineItem, CartState, VariantSelection};
pub use response::PaginatedResponse;
