//! # Order Lifecycle
//!
//! Order creation, status transitions and tracking-step derivation.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Order Lifecycle                                │
//! │                                                                     │
//! │  create_order()                                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────┐  update_status(..)                      ┌───────────┐  │
//! │  │ pending │ ───────────────────────────────────────►│ delivered │  │
//! │  └────┬────┘   confirmed → processing → shipped      └───────────┘  │
//! │       │        → out_for_delivery → delivered                       │
//! │       │                                                             │
//! │       │ cancel()              (terminal)                            │
//! │       ▼                                                             │
//! │  ┌───────────┐                                                      │
//! │  │ cancelled │  tracking steps untouched                            │
//! │  └───────────┘                                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Transitions are not validated against the step ordering: any status may
//! be set at any time, and skipped steps are not backfilled. Step
//! completion is monotonic; once a step is completed no operation resets
//! it. Orders are never deleted, only cancelled.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::CartLine;
use crate::money::Money;
use crate::types::{OrderStatus, ProductId, StepId};
use crate::ESTIMATED_DELIVERY_DAYS;

// =============================================================================
// Order Line
// =============================================================================

/// A line item in a finalized order.
///
/// Snapshot of the cart line at checkout time; immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    /// Catalog id of the product the line was created from.
    pub product_id: ProductId,

    /// Title at checkout time (frozen).
    pub title: String,

    /// Unit price in cents at checkout time (frozen).
    pub price_cents: i64,

    /// Image URL at checkout time (frozen).
    pub image: String,

    /// Category at checkout time (frozen).
    pub category: String,

    /// Quantity ordered.
    pub quantity: i64,
}

impl OrderLine {
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

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        OrderLine {
            product_id: line.product_id,
            title: line.title.clone(),
            price_cents: line.price_cents,
            image: line.image.clone(),
            category: line.category.clone(),
            quantity: line.quantity,
        }
    }
}

// =============================================================================
// Tracking
// =============================================================================

/// One stage in the fixed six-stage delivery progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TrackingStep {
    /// Step identity within the fixed catalog.
    pub id: StepId,

    /// Display label.
    pub label: String,

    /// Whether this stage has been reached. Monotonic: once true, never
    /// reset for the lifetime of the order.
    pub completed: bool,

    /// When the stage was reached, if it has been.
    #[ts(as = "Option<String>")]
    pub date: Option<DateTime<Utc>>,
}

/// Tracking state of a single order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TrackingState {
    /// The most recently reached step.
    pub current: StepId,

    /// The fixed step catalog, in progression order. Never reordered.
    pub steps: Vec<TrackingStep>,
}

impl TrackingState {
    /// Initial tracking state for a freshly placed order: `order_placed`
    /// completed now, every other step untouched.
    fn placed_at(now: DateTime<Utc>) -> Self {
        let steps = StepId::ALL
            .iter()
            .map(|&id| TrackingStep {
                id,
                label: id.label().to_string(),
                completed: id == StepId::OrderPlaced,
                date: (id == StepId::OrderPlaced).then_some(now),
            })
            .collect();

        TrackingState {
            current: StepId::OrderPlaced,
            steps,
        }
    }

    /// Looks up a step by id.
    pub fn step(&self, id: StepId) -> Option<&TrackingStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// The furthest completed step in catalog order.
    ///
    /// At least `order_placed` is always completed, so this only returns
    /// `None` on a tracking state that was never initialized through
    /// [`OrderBook::create_order`].
    pub fn last_completed(&self) -> Option<StepId> {
        self.steps
            .iter()
            .filter(|s| s.completed)
            .map(|s| s.id)
            .max_by_key(|id| id.position())
    }

    /// Marks a step reached: completed, dated, and current.
    fn mark_reached(&mut self, id: StepId, now: DateTime<Utc>) {
        if let Some(step) = self.steps.iter_mut().find(|s| s.id == id) {
            step.completed = true;
            step.date = Some(now);
            self.current = id;
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
///
/// `id`, `lines`, `total_price_cents`, `created_at` and
/// `estimated_delivery` are fixed at creation; `status` and `tracking` are
/// advanced in place by the status-update operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    /// Unique order id, generated at creation.
    pub id: String,

    /// Snapshot of the cart lines at checkout.
    pub lines: Vec<OrderLine>,

    /// Total price in cents, as computed by the cart at checkout.
    pub total_price_cents: i64,

    /// Current status.
    pub status: OrderStatus,

    /// When the order was placed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Fixed-offset delivery estimate (created_at + 7 days).
    #[ts(as = "String")]
    pub estimated_delivery: DateTime<Utc>,

    /// Delivery progression state.
    pub tracking: TrackingState,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }
}

/// Generates a unique order id: `ORD-{unix_millis}-{random suffix}`.
///
/// The timestamp keeps ids roughly sortable; the v4-uuid suffix makes the
/// collision probability negligible even for ids created within the same
/// millisecond.
fn generate_order_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("ORD-{}-{}", now.timestamp_millis(), &suffix[..9])
}

// =============================================================================
// Order Book
// =============================================================================

/// All orders placed during the process lifetime, most recent first.
///
/// ## Invariants
/// - The listing order is most-recent-first
/// - Order ids are unique across the process lifetime
/// - Orders are never removed, only cancelled
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Creates a new empty order book.
    pub fn new() -> Self {
        OrderBook { orders: Vec::new() }
    }

    /// Creates an order from a cart snapshot and returns its id.
    ///
    /// The new order starts `pending` with `order_placed` pre-completed,
    /// and is inserted at the front of the listing.
    pub fn create_order(&mut self, lines: &[CartLine], total_price: Money) -> String {
        let now = Utc::now();
        let order = Order {
            id: generate_order_id(now),
            lines: lines.iter().map(OrderLine::from).collect(),
            total_price_cents: total_price.cents(),
            status: OrderStatus::Pending,
            created_at: now,
            estimated_delivery: now + Duration::days(ESTIMATED_DELIVERY_DAYS),
            tracking: TrackingState::placed_at(now),
        };

        let id = order.id.clone();
        self.orders.insert(0, order);
        id
    }

    /// Sets an order's status. No-op (returns `false`) for unknown ids.
    ///
    /// When the status maps to a tracking step, that step is marked
    /// completed and dated and becomes `tracking.current`. Earlier steps
    /// are not backfilled, and ordering is not validated: transitions are
    /// free-form. `pending` and `cancelled` never touch tracking.
    pub fn update_status(&mut self, order_id: &str, status: OrderStatus) -> bool {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            return false;
        };

        order.status = status;
        if let Some(step_id) = status.step_id() {
            order.tracking.mark_reached(step_id, Utc::now());
        }
        true
    }

    /// Cancels an order unconditionally. No-op (returns `false`) for
    /// unknown ids.
    ///
    /// Tracking steps are left exactly as they were. There is no guard
    /// against cancelling a delivered order or re-updating a cancelled
    /// one; `cancelled` is terminal by convention, not enforcement.
    pub fn cancel(&mut self, order_id: &str) -> bool {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            return false;
        };
        order.status = OrderStatus::Cancelled;
        true
    }

    /// All orders, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Looks up an order by id.
    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Number of orders placed.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks if no orders have been placed.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
