//! Persisting wrapper around the core [`Cart`].
//!
//! Every mutation snapshots the full line array to storage under the
//! `order` key before returning, so the cart a customer builds survives
//! process restarts. Reads never touch storage.

use std::sync::Arc;

use tracing::warn;
use yom_kitchen_core::{Cart, CartLine, LineInput, MenuItemId, Money};

use crate::storage::{Storage, StorageError, keys};

/// The active cart, kept in sync with durable storage.
pub struct CartStore {
    cart: Cart,
    storage: Arc<dyn Storage>,
}

impl CartStore {
    /// Open the cart store, rehydrating any persisted snapshot.
    ///
    /// Rehydration is tolerant: an absent snapshot, a snapshot that fails
    /// to parse, or one that violates the cart invariants all yield an
    /// empty cart rather than an error. A customer with a corrupt snapshot
    /// gets a fresh cart, not a broken session.
    #[must_use]
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        let cart = match storage.load(keys::CART) {
            Ok(Some(snapshot)) => match serde_json::from_str::<Vec<CartLine>>(&snapshot) {
                Ok(lines) => Cart::restore(lines).unwrap_or_else(|| {
                    warn!("persisted cart violates invariants, starting empty");
                    Cart::new()
                }),
                Err(e) => {
                    warn!("persisted cart is unreadable, starting empty: {e}");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!("failed to load persisted cart, starting empty: {e}");
                Cart::new()
            }
        };

        Self { cart, storage }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The current cart value.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.cart.total_items()
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add an item, then persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted; the in-memory
    /// cart keeps the mutation either way.
    pub fn add(&mut self, input: LineInput) -> Result<(), StorageError> {
        self.cart.add(input);
        self.persist()
    }

    /// Decrement a line by one (removing it at zero), then persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub fn remove_one(&mut self, menu_item_id: MenuItemId) -> Result<(), StorageError> {
        self.cart.remove_one(menu_item_id);
        self.persist()
    }

    /// Increment a line by one, then persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub fn increase(&mut self, menu_item_id: MenuItemId) -> Result<(), StorageError> {
        self.cart.increase(menu_item_id);
        self.persist()
    }

    /// Decrement a line by one (removing it at zero), then persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub fn decrease(&mut self, menu_item_id: MenuItemId) -> Result<(), StorageError> {
        self.cart.decrease(menu_item_id);
        self.persist()
    }

    /// Empty the cart, then persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.cart.clear();
        self.persist()
    }

    /// Snapshot the full line array to storage.
    fn persist(&self) -> Result<(), StorageError> {
        let snapshot = serde_json::to_string(&self.cart)?;
        self.storage.save(keys::CART, &snapshot)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn injera(quantity: u32) -> LineInput {
        LineInput {
            menu_item_id: MenuItemId::new(1),
            item_name: "Injera".to_owned(),
            unit_price: "5.00".parse().unwrap(),
            quantity,
        }
    }

    #[test]
    fn test_open_without_snapshot_is_empty() {
        let store = CartStore::open(Arc::new(MemoryStorage::new()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_mutations_persist_and_rehydrate() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

        let mut store = CartStore::open(Arc::clone(&storage));
        store.add(injera(2)).unwrap();
        store.increase(MenuItemId::new(1)).unwrap();
        drop(store);

        let reopened = CartStore::open(storage);
        assert_eq!(reopened.total_items(), 3);
        assert_eq!(reopened.total_price(), "15.00".parse().unwrap());
    }

    #[test]
    fn test_snapshot_written_eagerly() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let mut store = CartStore::open(Arc::clone(&storage));

        store.add(injera(2)).unwrap();
        let snapshot = storage.load(keys::CART).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(value[0]["quantity"], 2);
        assert_eq!(value[0]["subtotal"], 10.0);

        store.clear().unwrap();
        assert_eq!(storage.load(keys::CART).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_unreadable_snapshot_starts_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.save(keys::CART, "not json at all").unwrap();

        let store = CartStore::open(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_snapshot_starts_empty() {
        let storage = Arc::new(MemoryStorage::new());
        // Zero quantity violates the cart invariants.
        storage
            .save(
                keys::CART,
                r#"[{"menu_item_id":1,"item_name":"Injera","item_price":5.0,
                     "quantity":0,"subtotal":0.0}]"#,
            )
            .unwrap();

        let store = CartStore::open(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_rehydrate_recomputes_subtotals() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .save(
                keys::CART,
                r#"[{"menu_item_id":1,"item_name":"Injera","item_price":5.0,
                     "quantity":2,"subtotal":999.0}]"#,
            )
            .unwrap();

        let store = CartStore::open(storage);
        assert_eq!(store.lines()[0].subtotal, "10.00".parse().unwrap());
    }
}
