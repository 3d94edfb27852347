//! redb-based persistence for the cart
//!
//! One table, `cart`: key = storefront scope string, value = the
//! JSON-serialized line-item array (the same wire format the line
//! items use everywhere else — camelCase fields, no version field).
//!
//! Loading is lossy on purpose: a missing key or a corrupt payload is
//! "no saved cart" (logged, never an error), so a format change costs
//! at most the saved cart, never a startup failure.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::cart::CartLineItem;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for saved carts: key = scope string, value = JSON line items
const CART_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("cart");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Cart storage backed by redb
#[derive(Clone)]
pub struct CartStorage {
    db: Arc<Database>,
}

impl CartStorage {
    /// Open or create the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Persist the full line-item sequence under the given scope key.
    pub fn save(&self, key: &str, items: &[CartLineItem]) -> StorageResult<()> {
        let payload = serde_json::to_vec(items)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.insert(key, payload.as_slice())?;
        }
        write_txn.commit()?;

        Ok(())
    }

    /// Load the saved cart for the given scope key.
    ///
    /// Missing key, unreadable database, or corrupt payload all come
    /// back as an empty cart; failures are logged at warn.
    pub fn load(&self, key: &str) -> Vec<CartLineItem> {
        match self.try_load(key) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read saved cart, starting empty");
                Vec::new()
            }
        }
    }

    fn try_load(&self, key: &str) -> StorageResult<Vec<CartLineItem>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CART_TABLE)?;

        let Some(raw) = table.get(key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_slice(raw.value()) {
            Ok(items) => Ok(items),
            Err(err) => {
                tracing::warn!(key, error = %err, "corrupt saved cart, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Write an arbitrary payload under a key (corruption tests).
    #[cfg(test)]
    pub(crate) fn save_raw(&self, key: &str, payload: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.insert(key, payload)?;
        }
        write_txn.commit()?;

        Ok(())
    }

    /// Delete the saved cart for the given scope key (sign-out path).
    pub fn delete(&self, key: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Product;

    fn test_item(line_id: &str, product_id: i64, quantity: i32) -> CartLineItem {
        CartLineItem {
            id: line_id.to_string(),
            product: Product {
                id: product_id.into(),
                name: format!("Product {}", product_id),
                price: "KSh 1,000".to_string(),
                original_price: None,
                image: None,
                category: "Misc".to_string(),
                rating: 4.0,
                reviews: 1,
                is_new: None,
                description: None,
                short_description: None,
                sku: None,
                inventory_count: None,
                tags: None,
                specifications: None,
                is_active: None,
                is_featured: None,
                slug: None,
            },
            quantity,
            selected_variant: None,
            unit_price: 1000.0,
            total_price: 1000.0 * quantity as f64,
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let storage = CartStorage::open_in_memory().unwrap();
        let items = vec![test_item("a", 1, 2), test_item("b", 2, 1)];

        storage.save("storefront-cart", &items).unwrap();
        let loaded = storage.load("storefront-cart");

        assert_eq!(loaded, items);
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let storage = CartStorage::open_in_memory().unwrap();
        assert!(storage.load("nothing-here").is_empty());
    }

    #[test]
    fn test_load_corrupt_payload_is_empty() {
        let storage = CartStorage::open_in_memory().unwrap();
        storage.save_raw("storefront-cart", b"{not json").unwrap();

        assert!(storage.load("storefront-cart").is_empty());
    }

    #[test]
    fn test_delete_removes_entry() {
        let storage = CartStorage::open_in_memory().unwrap();
        storage.save("storefront-cart", &[test_item("a", 1, 1)]).unwrap();

        storage.delete("storefront-cart").unwrap();
        assert!(storage.load("storefront-cart").is_empty());

        // Deleting an absent key is fine
        storage.delete("storefront-cart").unwrap();
    }

    #[test]
    fn test_reopen_on_disk_keeps_cart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.redb");
        let items = vec![test_item("a", 1, 3)];

        {
            let storage = CartStorage::open(&path).unwrap();
            storage.save("storefront-cart", &items).unwrap();
        }

        let storage = CartStorage::open(&path).unwrap();
        assert_eq!(storage.load("storefront-cart"), items);
    }
}
