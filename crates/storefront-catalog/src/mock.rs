//! # Mock Catalog
//!
//! In-memory [`ProductCatalog`] implementation seeded with fixture
//! products, so the storefront runs end-to-end without any backend.
//!
//! The mock can simulate the two failure surfaces the presentation layer
//! has to handle: response latency and an unavailable catalog.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use storefront_core::{Product, ProductId, Rating};

use crate::catalog::ProductCatalog;
use crate::error::{CatalogError, CatalogResult};

/// Fixture products: (id, title, price_cents, category, rating, reviews).
///
/// Image URLs are derived from the id. Prices and ratings are frozen so
/// tests can assert against them.
const FIXTURES: &[(ProductId, &str, i64, &str, f64, u32)] = &[
    (1, "Slim Fit Casual Jacket", 5499, "men's clothing", 4.1, 259),
    (2, "Classic Crew Neck T-Shirt", 1595, "men's clothing", 3.9, 120),
    (3, "Trail Running Backpack", 10995, "men's clothing", 4.7, 500),
    (4, "Chronograph Leather Watch", 13999, "jewelery", 4.3, 92),
    (5, "Sterling Silver Pendant", 6950, "jewelery", 4.6, 400),
    (6, "Gold Plated Ring", 1099, "jewelery", 3.0, 34),
    (7, "1TB Portable SSD", 10900, "electronics", 4.8, 319),
    (8, "Wireless Gaming Mouse", 6449, "electronics", 4.2, 140),
    (9, "27\" QHD Monitor", 59999, "electronics", 4.5, 250),
    (10, "USB-C Docking Station", 11499, "electronics", 3.6, 146),
    (11, "Rain Shell Jacket", 3995, "women's clothing", 3.8, 679),
    (12, "Knit Winter Sweater", 2999, "women's clothing", 4.0, 235),
];

/// An in-memory product catalog.
///
/// Cloneable and cheap: the product list is built once per instance.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Vec<Product>,
    latency: Option<Duration>,
    available: bool,
}

impl MockCatalog {
    /// Creates a catalog over an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        MockCatalog {
            products,
            latency: None,
            available: true,
        }
    }

    /// Creates a catalog seeded with the built-in fixture products.
    pub fn with_fixtures() -> Self {
        let products = FIXTURES
            .iter()
            .map(|&(id, title, price_cents, category, rate, count)| Product {
                id,
                title: title.to_string(),
                price_cents,
                image: format!("https://fixtures.example.com/img/{}.png", id),
                category: category.to_string(),
                rating: Rating { rate, count },
            })
            .collect();
        Self::new(products)
    }

    /// Creates a catalog whose every fetch fails with
    /// [`CatalogError::Unavailable`]. For exercising error paths.
    pub fn unavailable() -> Self {
        MockCatalog {
            products: Vec::new(),
            latency: None,
            available: false,
        }
    }

    /// Adds simulated response latency to every fetch.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    async fn simulate_request(&self) -> CatalogResult<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if !self.available {
            return Err(CatalogError::unavailable("mock catalog set unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductCatalog for MockCatalog {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        self.simulate_request().await?;
        debug!(count = self.products.len(), "mock catalog listed products");
        Ok(self.products.clone())
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        self.simulate_request().await?;
        let product = self.products.iter().find(|p| p.id == id).cloned();
        debug!(id, found = product.is_some(), "mock catalog product lookup");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixtures_are_listed() {
        let catalog = MockCatalog::with_fixtures();
        let products = catalog.fetch_products().await.unwrap();
        assert_eq!(products.len(), FIXTURES.len());
    }

    #[tokio::test]
    async fn test_lookup_by_id() {
        let catalog = MockCatalog::with_fixtures();
        let product = catalog.fetch_product_by_id(7).await.unwrap().unwrap();
        assert_eq!(product.title, "1TB Portable SSD");
        assert_eq!(product.price_cents, 10900);
    }

    #[tokio::test]
    async fn test_lookup_missing_id_is_none() {
        let catalog = MockCatalog::with_fixtures();
        assert!(catalog.fetch_product_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unavailable_catalog_fails_every_fetch() {
        let catalog = MockCatalog::unavailable();
        assert!(matches!(
            catalog.fetch_products().await,
            Err(CatalogError::Unavailable { .. })
        ));
        assert!(matches!(
            catalog.fetch_product_by_id(1).await,
            Err(CatalogError::Unavailable { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let catalog = MockCatalog::with_fixtures().with_latency(Duration::from_millis(150));
        let before = tokio::time::Instant::now();
        catalog.fetch_products().await.unwrap();
        assert!(before.elapsed() >= Duration::from_millis(150));
    }
}
