//! Storefront Client - HTTP boundary to the catalog service
//!
//! Provides typed calls to the headless catalog API (products and
//! categories) with a short-lived response cache and a built-in
//! fallback catalog so the storefront stays browsable when the
//! backend is unreachable.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fallback;

pub use catalog::{CatalogClient, ProductFilters};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Re-export shared types for convenience
pub use shared::models::{Category, Product, ProductId};
pub use shared::response::PaginatedResponse;
