//! # Checkout
//!
//! The one flow that couples two stores: a cart snapshot becomes an order,
//! then the cart is cleared.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Tap "Checkout"                                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  snapshot cart ──► empty? ──► Err(EmptyCart)                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  OrderStore::create_order(lines, total)                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  CartStore::clear()                                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Ok(order_id) ──► navigate to order tracking                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order owns an independent copy of the line data; clearing the cart
//! afterwards cannot touch it.

use tracing::info;

use storefront_core::{CoreError, CoreResult};

use crate::state::{CartStore, OrderStore};

/// Converts the current cart into a new order and clears the cart.
///
/// Errors with [`CoreError::EmptyCart`] when there is nothing to check
/// out; the stores are left untouched in that case.
pub fn checkout(cart: &CartStore, orders: &OrderStore) -> CoreResult<String> {
    let snapshot = cart.snapshot();
    if snapshot.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let total = snapshot.total_price();
    let order_id = orders.create_order(&snapshot.lines, total);
    cart.clear();

    info!(order_id = %order_id, total = %total, "Checkout complete");
    Ok(order_id)
}
