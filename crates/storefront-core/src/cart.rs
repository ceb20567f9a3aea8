//! # Cart
//!
//! The shopping cart: line items keyed by product id, with derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  UI Action               Operation              State Change        │
//! │  ─────────               ─────────              ────────────        │
//! │                                                                     │
//! │  Tap "Add to Cart" ────► add_product() ──────►  qty += 1 / insert   │
//! │                                                                     │
//! │  Tap +/- stepper ──────► update_quantity() ──►  qty = n (≤0 drops)  │
//! │                                                                     │
//! │  Tap remove ───────────► remove() ───────────►  line deleted        │
//! │                                                                     │
//! │  Checkout complete ────► clear() ────────────►  all lines deleted   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is a no-op for unknown product ids. Totals are
//! recomputed on each query, never cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Line
// =============================================================================

/// A line item in the shopping cart.
///
/// Product data is snapshotted at the moment of adding. The cart keeps
/// displaying consistent data even if the catalog entry changes afterwards,
/// and the price is locked in for checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Catalog id of the product (snapshot key).
    pub product_id: ProductId,

    /// Title at time of adding (frozen).
    pub title: String,

    /// Price in cents at time of adding (frozen).
    pub price_cents: i64,

    /// Image URL at time of adding (frozen).
    pub image: String,

    /// Category at time of adding (frozen).
    pub category: String,

    /// Quantity in cart. Always >= 1 while the line exists.
    pub quantity: i64,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line from a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id,
            title: product.title.clone(),
            price_cents: product.price_cents,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per product id (adding the same product bumps quantity)
/// - Quantity is never observable below 1 (an update to <= 0 removes the line)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1
    /// - Product not in cart: new line with quantity 1, price frozen now
    ///
    /// Safe to call repeatedly; each call adds exactly one unit.
    pub fn add_product(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine::from_product(product));
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - Quantity <= 0: the line is removed
    /// - Product not in cart: no-op
    ///
    /// Returns `true` when the cart changed.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Removes a line by product id. No-op when absent.
    ///
    /// Returns `true` when a line was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != initial_len
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Looks up a line by product id.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Total price of the cart: Σ(line price × quantity).
    ///
    /// Recomputed fresh on every call.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total quantity across all lines. This is the cart badge count.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub total_price_cents: i64,
    pub item_count: i64,
    pub line_count: usize,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            total_price_cents: cart.total_price().cents(),
            item_count: cart.item_count(),
            line_count: cart.line_count(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
