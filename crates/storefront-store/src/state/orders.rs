//! # Order Store
//!
//! Owns the order book: creation from a cart snapshot, status updates,
//! cancellation, and the listing/lookup queries the orders screens read.
//!
//! The lifecycle rules live in [`storefront_core::OrderBook`]; this
//! container adds sharing, notification and logging.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use storefront_core::{CartLine, Money, Order, OrderBook, OrderStatus};

/// The order state container.
#[derive(Debug, Clone)]
pub struct OrderStore {
    tx: Arc<watch::Sender<OrderBook>>,
}

impl OrderStore {
    /// Creates a new store with an empty order book.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(OrderBook::new());
        OrderStore { tx: Arc::new(tx) }
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Creates an order from a cart snapshot and returns the new order id.
    ///
    /// The lines are copied into the order; the caller's cart is not
    /// touched (checkout clears it separately).
    pub fn create_order(&self, lines: &[CartLine], total_price: Money) -> String {
        let mut order_id = String::new();
        self.tx.send_modify(|book| {
            order_id = book.create_order(lines, total_price);
        });
        info!(
            order_id = %order_id,
            total = %total_price,
            lines = lines.len(),
            "Order created"
        );
        order_id
    }

    /// Sets an order's status, deriving tracking-step completion.
    /// No-op for unknown ids.
    pub fn update_status(&self, order_id: &str, status: OrderStatus) {
        debug!(order_id, status = %status, "update_order_status");
        self.tx
            .send_if_modified(|book| book.update_status(order_id, status));
    }

    /// Cancels an order. No-op for unknown ids.
    pub fn cancel(&self, order_id: &str) {
        info!(order_id, "cancel_order");
        self.tx.send_if_modified(|book| book.cancel(order_id));
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// All orders, most recent first.
    pub fn orders(&self) -> Vec<Order> {
        self.tx.borrow().orders().to_vec()
    }

    /// Looks up an order by id; `None` is a normal outcome.
    pub fn get(&self, order_id: &str) -> Option<Order> {
        self.tx.borrow().get(order_id).cloned()
    }

    /// Number of orders placed.
    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    /// Checks if no orders have been placed.
    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Subscribes to order-book changes. Drop the receiver to release the
    /// subscription.
    pub fn subscribe(&self) -> watch::Receiver<OrderBook> {
        self.tx.subscribe()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Cart, Product, Rating, StepId};

    fn test_product(id: u64, price_cents: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price_cents,
            image: format!("https://img.example.com/{}.png", id),
            category: "electronics".to_string(),
            rating: Rating {
                rate: 4.9,
                count: 3,
            },
        }
    }

    fn cart_lines() -> Cart {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 1000));
        cart
    }

    #[test]
    fn test_create_then_lookup() {
        let store = OrderStore::new();
        let cart = cart_lines();
        let id = store.create_order(&cart.lines, cart.total_price());

        let order = store.get(&id).expect("order must be retrievable");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_price_cents, 1000);
        assert!(store.get("ORD-0-missing").is_none());
    }

    #[test]
    fn test_update_status_through_store() {
        let store = OrderStore::new();
        let cart = cart_lines();
        let id = store.create_order(&cart.lines, cart.total_price());

        store.update_status(&id, OrderStatus::Confirmed);

        let order = store.get(&id).unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.tracking.current, StepId::Confirmed);
    }

    #[tokio::test]
    async fn test_unknown_id_update_does_not_notify() {
        let store = OrderStore::new();
        let cart = cart_lines();
        store.create_order(&cart.lines, cart.total_price());

        let mut rx = store.subscribe();
        rx.mark_unchanged();

        store.update_status("ORD-0-missing", OrderStatus::Shipped);
        store.cancel("ORD-0-missing");
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_subscribers_see_new_orders() {
        let store = OrderStore::new();
        let mut rx = store.subscribe();

        let cart = cart_lines();
        let id = store.create_order(&cart.lines, cart.total_price());

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().orders()[0].id, id);
    }
}
