//! # storefront-store: Stateful Store Layer
//!
//! The mutable-state layer of the storefront: three independent state
//! containers composed only through the checkout flow and read by the
//! presentation layer through snapshot queries and watch subscriptions.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     storefront-store                                │
//! │                                                                     │
//! │  ┌──────────────┐   checkout()   ┌──────────────┐                   │
//! │  │  CartStore   │ ─────────────► │  OrderStore  │ ◄── Tracker task  │
//! │  └──────────────┘  (snapshot +   └──────────────┘     (per view)    │
//! │                     clear)                                          │
//! │  ┌────────────────┐                                                 │
//! │  │ FavoritesStore │   independent; shares only product identity     │
//! │  └────────────────┘                                                 │
//! │                                                                     │
//! │  Commands mutate + notify. Queries return owned snapshots.          │
//! │  Subscriptions are watch receivers, dropped on view teardown.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! State lives only for the process lifetime; durability is an explicit
//! non-goal.

pub mod checkout;
pub mod state;
pub mod tracker;

pub use checkout::checkout;
pub use state::{CartStore, FavoritesStore, OrderStore};
pub use tracker::{Tracker, TrackerConfig, TrackerHandle};
