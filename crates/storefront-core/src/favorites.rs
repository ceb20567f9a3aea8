//! # Favorites
//!
//! The favorites collection: pure set semantics over product id, with
//! insertion order preserved for display.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Product, ProductId};

/// The set of favorited products.
///
/// ## Invariants
/// - No duplicate product ids
/// - Products are kept in the order they were favorited
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Favorites {
    items: Vec<Product>,
}

impl Favorites {
    /// Creates a new empty favorites set.
    pub fn new() -> Self {
        Favorites { items: Vec::new() }
    }

    /// Adds a product to favorites. No-op when already present.
    ///
    /// Returns `true` when the set changed.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.is_favorite(product.id) {
            return false;
        }
        self.items.push(product.clone());
        true
    }

    /// Removes a product from favorites by id. No-op when absent.
    ///
    /// Returns `true` when the set changed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|p| p.id != product_id);
        self.items.len() != initial_len
    }

    /// Toggles membership: removes the product if present, adds it otherwise.
    ///
    /// This is the entry point the presentation layer uses; `add`/`remove`
    /// remain available for direct manipulation.
    pub fn toggle(&mut self, product: &Product) {
        if !self.remove(product.id) {
            self.items.push(product.clone());
        }
    }

    /// Membership test by product id.
    pub fn is_favorite(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// The favorited products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.items
    }

    /// Number of favorited products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if no products are favorited.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn test_product(id: ProductId) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price_cents: 1299,
            image: format!("https://img.example.com/{}.png", id),
            category: "jewelery".to_string(),
            rating: Rating {
                rate: 3.9,
                count: 70,
            },
        }
    }

    #[test]
    fn test_add_is_noop_on_duplicate() {
        let mut favorites = Favorites::new();
        let product = test_product(1);

        assert!(favorites.add(&product));
        assert!(!favorites.add(&product));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut favorites = Favorites::new();
        assert!(!favorites.remove(1));

        favorites.add(&test_product(1));
        assert!(favorites.remove(1));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_involution() {
        let mut favorites = Favorites::new();
        let product = test_product(1);
        favorites.add(&test_product(2));

        let before = favorites.is_favorite(product.id);
        favorites.toggle(&product);
        favorites.toggle(&product);
        assert_eq!(favorites.is_favorite(product.id), before);

        // And again starting from the favorited state
        favorites.toggle(&product);
        let before = favorites.is_favorite(product.id);
        favorites.toggle(&product);
        favorites.toggle(&product);
        assert_eq!(favorites.is_favorite(product.id), before);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut favorites = Favorites::new();
        favorites.add(&test_product(3));
        favorites.add(&test_product(1));
        favorites.add(&test_product(2));

        let ids: Vec<ProductId> = favorites.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
