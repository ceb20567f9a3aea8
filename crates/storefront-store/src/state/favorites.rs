//! # Favorites Store
//!
//! Holds the favorited-product set and notifies subscribers on changes.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use storefront_core::{Favorites, Product, ProductId};

/// The favorites state container.
///
/// `toggle` is the entry point the UI uses; `add`/`remove` are available
/// for direct manipulation. All commands are no-ops when they would not
/// change membership, and no-ops do not wake subscribers.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    tx: Arc<watch::Sender<Favorites>>,
}

impl FavoritesStore {
    /// Creates a new store with no favorites.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Favorites::new());
        FavoritesStore { tx: Arc::new(tx) }
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Adds a product to favorites. No-op when already present.
    pub fn add(&self, product: &Product) {
        debug!(product_id = product.id, "add_to_favorites");
        self.tx.send_if_modified(|favorites| favorites.add(product));
    }

    /// Removes a product from favorites. No-op when absent.
    pub fn remove(&self, product_id: ProductId) {
        debug!(product_id, "remove_from_favorites");
        self.tx
            .send_if_modified(|favorites| favorites.remove(product_id));
    }

    /// Toggles a product's membership.
    pub fn toggle(&self, product: &Product) {
        debug!(product_id = product.id, "toggle_favorite");
        self.tx.send_modify(|favorites| favorites.toggle(product));
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Membership test by product id.
    pub fn is_favorite(&self, product_id: ProductId) -> bool {
        self.tx.borrow().is_favorite(product_id)
    }

    /// Owned snapshot of the favorites set.
    pub fn snapshot(&self) -> Favorites {
        self.tx.borrow().clone()
    }

    /// The favorited products in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.tx.borrow().products().to_vec()
    }

    /// Number of favorited products.
    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    /// Checks if no products are favorited.
    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Subscribes to favorites changes. Drop the receiver to release the
    /// subscription.
    pub fn subscribe(&self) -> watch::Receiver<Favorites> {
        self.tx.subscribe()
    }
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}
