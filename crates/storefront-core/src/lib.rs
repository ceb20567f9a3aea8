//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (mobile UI)                    │   │
//! │  │    Home ──► Product Detail ──► Cart ──► Orders/Tracking     │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              storefront-store (state containers)            │   │
//! │  │    CartStore, FavoritesStore, OrderStore, Tracker           │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ storefront-core (THIS CRATE) ★               │   │
//! │  │                                                             │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌───────────┐  ┌────────────┐  │   │
//! │  │   │  types  │  │  money  │  │   cart    │  │   orders   │  │   │
//! │  │   │ Product │  │  Money  │  │   Cart    │  │ OrderBook  │  │   │
//! │  │   │ Status  │  │         │  │ CartLine  │  │  Tracking  │  │   │
//! │  │   └─────────┘  └─────────┘  └───────────┘  └────────────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO TIMERS • NO NETWORK • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, OrderStatus, StepId)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart lines and derived totals
//! - [`favorites`] - Favorites set semantics
//! - [`orders`] - Order lifecycle state machine and tracking derivation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic over its inputs
//!    (order-id generation and timestamps being the only entropy).
//! 2. **No I/O**: Database, network and timer access is FORBIDDEN here.
//! 3. **Integer Money**: All monetary values are in cents (i64).
//! 4. **Total Commands**: Unknown ids are no-ops, never panics or faults.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod favorites;
pub mod money;
pub mod orders;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Money` instead of
// `use storefront_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{CoreError, CoreResult};
pub use favorites::Favorites;
pub use money::Money;
pub use orders::{Order, OrderBook, OrderLine, TrackingState, TrackingStep};
pub use types::{OrderStatus, Product, ProductId, Rating, StepId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Days between order placement and the delivery estimate.
///
/// A fixed offset by design: the estimate is a demo-grade promise, not a
/// carrier quote, and is computed once at creation.
pub const ESTIMATED_DELIVERY_DAYS: i64 = 7;
