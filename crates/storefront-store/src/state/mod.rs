//! # State Module
//!
//! The three state containers backing the storefront screens.
//!
//! ## Why Multiple Store Types?
//! Instead of a single `AppState` struct containing everything, each
//! concern gets its own store. This approach:
//!
//! 1. **Better Separation of Concerns**: each store has a single responsibility
//! 2. **Easier Testing**: stores can be exercised in isolation
//! 3. **Clearer Signatures**: consumers declare exactly what state they need
//! 4. **Reduced Contention**: independent stores don't notify each other's
//!    subscribers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Store Architecture                             │
//! │                                                                     │
//! │          ┌──────────────┐  ┌────────────────┐  ┌──────────────┐     │
//! │          │  CartStore   │  │ FavoritesStore │  │  OrderStore  │     │
//! │          │              │  │                │  │              │     │
//! │          │ watch<Cart>  │  │ watch<Favs>    │  │ watch<Book>  │     │
//! │          └──────┬───────┘  └───────┬────────┘  └──────┬───────┘     │
//! │                 │                  │                  │             │
//! │                 ▼                  ▼                  ▼             │
//! │          subscribe() -> watch::Receiver (held per view, dropped     │
//! │          on teardown); snapshot() -> owned copy, never a live ref   │
//! │                                                                     │
//! │  THREAD SAFETY:                                                     │
//! │  • Each store is Clone; clones share the same channel               │
//! │  • watch::Sender serializes writers; readers never block writers    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Command methods mutate and notify; they return nothing beyond
//! success/no-op. Derived queries are safe to call at any time and return
//! snapshots.

mod cart;
mod favorites;
mod orders;

pub use cart::CartStore;
pub use favorites::FavoritesStore;
pub use orders::OrderStore;
