//! # Domain Types
//!
//! Core domain types shared across the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │   OrderStatus   │   │     StepId      │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (u64)       │   │  Pending        │   │  OrderPlaced    │   │
//! │  │  title          │   │  Confirmed      │   │  Confirmed      │   │
//! │  │  price_cents    │   │  ...            │   │  ...            │   │
//! │  │  rating         │   │  Cancelled      │   │  Delivered      │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `OrderStatus` is a superset of `StepId`: every step maps to a status,
//! while `Pending` and `Cancelled` exist only as statuses and never appear
//! in the tracking step catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

/// Catalog product identifier.
///
/// The external catalog hands out small integer ids; the core only ever
/// compares them for identity.
pub type ProductId = u64;

// =============================================================================
// Rating
// =============================================================================

/// Aggregate customer rating carried on a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average rating, 0.0 - 5.0.
    pub rate: f64,

    /// Number of reviews behind the average.
    pub count: u32,
}

// =============================================================================
// Product
// =============================================================================

/// A product from the external catalog.
///
/// Opaque to the core except for identity and price: the stores snapshot
/// the fields they need and never mutate a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,

    /// Display title.
    pub title: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Product image URL.
    pub image: String,

    /// Catalog category (e.g. "electronics").
    pub category: String,

    /// Aggregate customer rating.
    pub rating: Rating,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Tracking Step Identity
// =============================================================================

/// Identity of one stage in the fixed six-stage delivery progression.
///
/// The ordering of the variants IS the progression ordering and is never
/// reordered. `OrderPlaced` is synthetic: it is pre-completed at order
/// creation and never set through a status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    OrderPlaced,
    Confirmed,
    Processing,
    Shipped,
    OutForDelivery,
    Delivered,
}

impl StepId {
    /// The fixed step catalog, in progression order.
    pub const ALL: [StepId; 6] = [
        StepId::OrderPlaced,
        StepId::Confirmed,
        StepId::Processing,
        StepId::Shipped,
        StepId::OutForDelivery,
        StepId::Delivered,
    ];

    /// Wire spelling of the step id.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StepId::OrderPlaced => "order_placed",
            StepId::Confirmed => "confirmed",
            StepId::Processing => "processing",
            StepId::Shipped => "shipped",
            StepId::OutForDelivery => "out_for_delivery",
            StepId::Delivered => "delivered",
        }
    }

    /// Display label shown next to the step.
    pub const fn label(&self) -> &'static str {
        match self {
            StepId::OrderPlaced => "Order Placed",
            StepId::Confirmed => "Order Confirmed",
            StepId::Processing => "Processing",
            StepId::Shipped => "Shipped",
            StepId::OutForDelivery => "Out for Delivery",
            StepId::Delivered => "Delivered",
        }
    }

    /// Zero-based position of the step in the fixed catalog.
    pub const fn position(&self) -> usize {
        match self {
            StepId::OrderPlaced => 0,
            StepId::Confirmed => 1,
            StepId::Processing => 2,
            StepId::Shipped => 3,
            StepId::OutForDelivery => 4,
            StepId::Delivered => 5,
        }
    }

    /// The step following this one in the catalog, if any.
    pub const fn next(&self) -> Option<StepId> {
        match self {
            StepId::OrderPlaced => Some(StepId::Confirmed),
            StepId::Confirmed => Some(StepId::Processing),
            StepId::Processing => Some(StepId::Shipped),
            StepId::Shipped => Some(StepId::OutForDelivery),
            StepId::OutForDelivery => Some(StepId::Delivered),
            StepId::Delivered => None,
        }
    }

    /// The order status carried by an order sitting at this step.
    pub const fn as_status(&self) -> OrderStatus {
        match self {
            // A freshly placed order is still pending confirmation
            StepId::OrderPlaced => OrderStatus::Pending,
            StepId::Confirmed => OrderStatus::Confirmed,
            StepId::Processing => OrderStatus::Processing,
            StepId::Shipped => OrderStatus::Shipped,
            StepId::OutForDelivery => OrderStatus::OutForDelivery,
            StepId::Delivered => OrderStatus::Delivered,
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
///
/// A superset of [`StepId`]: `Pending` (created, not yet confirmed) and
/// `Cancelled` (out-of-band terminal) never appear in the tracking catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order created, awaiting confirmation.
    Pending,
    /// Order confirmed by the merchant.
    Confirmed,
    /// Order being prepared.
    Processing,
    /// Order handed to the carrier.
    Shipped,
    /// Order on the delivery vehicle.
    OutForDelivery,
    /// Order delivered. Terminal.
    Delivered,
    /// Order cancelled. Terminal, reachable from any non-delivered status.
    Cancelled,
}

impl OrderStatus {
    /// Wire spelling of the status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Human-readable label for status badges.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// The tracking step this status maps to, if any.
    ///
    /// `Pending` and `Cancelled` have no step: status updates carrying
    /// them never touch tracking state.
    pub const fn step_id(&self) -> Option<StepId> {
        match self {
            OrderStatus::Pending => None,
            OrderStatus::Confirmed => Some(StepId::Confirmed),
            OrderStatus::Processing => Some(StepId::Processing),
            OrderStatus::Shipped => Some(StepId::Shipped),
            OrderStatus::OutForDelivery => Some(StepId::OutForDelivery),
            OrderStatus::Delivered => Some(StepId::Delivered),
            OrderStatus::Cancelled => None,
        }
    }

    /// Whether no further transitions are meaningful.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "out_for_delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(CoreError::InvalidStatus(other.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_catalog_order_is_fixed() {
        let positions: Vec<usize> = StepId::ALL.iter().map(|s| s.position()).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_step_next_walks_the_catalog() {
        let mut step = StepId::OrderPlaced;
        let mut walked = vec![step];
        while let Some(next) = step.next() {
            walked.push(next);
            step = next;
        }
        assert_eq!(walked, StepId::ALL);
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "returned".parse::<OrderStatus>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidStatus(s) if s == "returned"));
    }

    #[test]
    fn test_status_step_mapping() {
        assert_eq!(OrderStatus::Pending.step_id(), None);
        assert_eq!(OrderStatus::Cancelled.step_id(), None);
        assert_eq!(OrderStatus::Shipped.step_id(), Some(StepId::Shipped));
        assert_eq!(
            OrderStatus::OutForDelivery.step_id(),
            Some(StepId::OutForDelivery)
        );
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"out_for_delivery\"");
        let json = serde_json::to_string(&StepId::OrderPlaced).unwrap();
        assert_eq!(json, "\"order_placed\"");
    }

    #[test]
    fn test_product_price_helper() {
        let product = Product {
            id: 1,
            title: "Wireless Mouse".to_string(),
            price_cents: 2499,
            image: "https://img.example.com/1.png".to_string(),
            category: "electronics".to_string(),
            rating: Rating {
                rate: 4.2,
                count: 120,
            },
        };
        assert_eq!(product.price(), Money::from_cents(2499));
    }
}
