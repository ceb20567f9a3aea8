//! # Catalog Interface
//!
//! The async seam between the storefront and whatever serves product data.
//! Implementations may hit a real HTTP API or an in-memory fixture set
//! ([`MockCatalog`](crate::MockCatalog)); callers cannot tell the
//! difference and must treat every call as possibly failing.

use async_trait::async_trait;

use storefront_core::{Product, ProductId};

use crate::error::CatalogResult;

/// Read access to the external product catalog.
///
/// Both calls are single-shot: no retry, no caching. A missing product is
/// `Ok(None)`, a normal outcome; only transport-level failure is an error.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetches the full product listing.
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>>;

    /// Fetches a single product by id. Absence is `Ok(None)`.
    async fn fetch_product_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;
}

/// Filters a fetched product list by a search query.
///
/// Matches case-insensitively against title and category, the same way the
/// home-screen search box behaves. A blank query matches everything.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&query) || p.category.to_lowercase().contains(&query)
        })
        .collect()
}
