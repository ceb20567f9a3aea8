//! # Cart Store
//!
//! Holds the live shopping cart and notifies subscribers on every change.
//!
//! All cart rules live in [`storefront_core::Cart`]; this container adds
//! sharing and change notification on top.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use storefront_core::{Cart, CartTotals, Money, Product, ProductId};

/// The cart state container.
///
/// Cloning is cheap and every clone addresses the same cart. Mutations go
/// through the watch channel, so subscribers observe each change; no-op
/// commands (unknown ids, unchanged quantities) do not wake subscribers.
#[derive(Debug, Clone)]
pub struct CartStore {
    tx: Arc<watch::Sender<Cart>>,
}

impl CartStore {
    /// Creates a new store with an empty cart.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Cart::new());
        CartStore { tx: Arc::new(tx) }
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Adds one unit of a product to the cart.
    pub fn add_product(&self, product: &Product) {
        debug!(product_id = product.id, title = %product.title, "add_product");
        self.tx.send_modify(|cart| cart.add_product(product));
    }

    /// Sets a line's quantity; a value <= 0 removes the line.
    pub fn update_quantity(&self, product_id: ProductId, quantity: i64) {
        debug!(product_id, quantity, "update_quantity");
        self.tx
            .send_if_modified(|cart| cart.update_quantity(product_id, quantity));
    }

    /// Removes a line by product id. No-op when absent.
    pub fn remove(&self, product_id: ProductId) {
        debug!(product_id, "remove_from_cart");
        self.tx.send_if_modified(|cart| cart.remove(product_id));
    }

    /// Clears all lines.
    pub fn clear(&self) {
        debug!("clear_cart");
        self.tx.send_if_modified(|cart| {
            let had_lines = !cart.is_empty();
            cart.clear();
            had_lines
        });
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Owned snapshot of the cart.
    pub fn snapshot(&self) -> Cart {
        self.tx.borrow().clone()
    }

    /// Totals summary, recomputed fresh.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&*self.tx.borrow())
    }

    /// Total price of the cart.
    pub fn total_price(&self) -> Money {
        self.tx.borrow().total_price()
    }

    /// Total quantity across all lines (the badge count).
    pub fn item_count(&self) -> i64 {
        self.tx.borrow().item_count()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Subscribes to cart changes.
    ///
    /// The receiver is the subscription handle: drop it on view teardown
    /// and the subscription is released.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.tx.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Rating;

    fn test_product(id: ProductId, price_cents: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price_cents,
            image: format!("https://img.example.com/{}.png", id),
            category: "electronics".to_string(),
            rating: Rating {
                rate: 4.0,
                count: 11,
            },
        }
    }

    #[test]
    fn test_commands_mutate_shared_state() {
        let store = CartStore::new();
        let clone = store.clone();

        store.add_product(&test_product(1, 1000));
        clone.add_product(&test_product(1, 1000));

        assert_eq!(store.item_count(), 2);
        assert_eq!(store.total_price().cents(), 2000);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = CartStore::new();
        store.add_product(&test_product(1, 1000));

        let snapshot = store.snapshot();
        store.clear();

        assert_eq!(snapshot.item_count(), 1);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.add_product(&test_product(1, 500));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().item_count(), 1);
    }

    #[tokio::test]
    async fn test_noop_commands_do_not_notify() {
        let store = CartStore::new();
        let mut rx = store.subscribe();
        rx.mark_unchanged();

        store.remove(42); // nothing in the cart
        store.update_quantity(42, 3); // unknown id
        store.clear(); // already empty

        assert!(!rx.has_changed().unwrap());
    }
}
