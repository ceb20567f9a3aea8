//! # Tracking Auto-Advance
//!
//! While an order-tracking view is on screen, a repeating timer walks the
//! displayed order through the fixed step catalog, one step per tick,
//! until `delivered`.
//!
//! ## Task Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Tracker Task Lifecycle                           │
//! │                                                                     │
//! │  view mounted ──► Tracker::spawn(store, order_id, config)           │
//! │                          │                                          │
//! │                          ▼                                          │
//! │                ┌──────────────────────┐                             │
//! │   tick ───────►│ advance one step     │──── delivered? ──► stop     │
//! │   (interval)   │ through the catalog  │──── cancelled? ──► stop     │
//! │                └──────────────────────┘──── order gone? ──► stop    │
//! │                          ▲                                          │
//! │                          │ shutdown() / handle dropped              │
//! │  view torn down ─────────┴────────────────────────────► stop        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The handle is the task's lifetime: `shutdown()` stops it gracefully,
//! and dropping the handle aborts it unconditionally. Either way a
//! dismissed view can never leave a timer mutating the store behind its
//! back. Spawn a fresh tracker when the displayed order changes.
//!
//! Advancement lives here, not in the store: the order book only ever
//! sees ordinary status updates.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::debug;

use storefront_core::StepId;

use crate::state::OrderStore;

// =============================================================================
// Configuration
// =============================================================================

/// Tracker timing configuration.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Time between advancement ticks.
    pub tick_interval: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            // The demo cadence: one step every five seconds
            tick_interval: Duration::from_secs(5),
        }
    }
}

// =============================================================================
// Tracker
// =============================================================================

/// Spawns the per-view auto-advance task.
pub struct Tracker;

impl Tracker {
    /// Starts advancing `order_id` inside `store` on the configured
    /// cadence. The first tick fires one full interval after spawn.
    pub fn spawn(
        store: OrderStore,
        order_id: impl Into<String>,
        config: TrackerConfig,
    ) -> TrackerHandle {
        let order_id = order_id.into();
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let task = tokio::spawn(async move {
            let mut ticks = interval_at(
                Instant::now() + config.tick_interval,
                config.tick_interval,
            );

            loop {
                tokio::select! {
                    _ = ticks.tick() => {
                        if !advance_once(&store, &order_id) {
                            break;
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        debug!(order_id = %order_id, "Tracker received shutdown");
                        break;
                    }
                }
            }

            debug!(order_id = %order_id, "Tracker stopped");
        });

        TrackerHandle { shutdown_tx, task }
    }
}

/// Advances the order one step through the fixed catalog.
///
/// Returns `false` once there is nothing left to do: the order is gone,
/// terminal, or was just delivered.
fn advance_once(store: &OrderStore, order_id: &str) -> bool {
    let Some(order) = store.get(order_id) else {
        debug!(order_id, "Tracker target disappeared");
        return false;
    };
    if order.status.is_terminal() {
        return false;
    }

    let Some(next) = order.tracking.last_completed().and_then(|s| s.next()) else {
        return false;
    };

    store.update_status(order_id, next.as_status());
    debug!(order_id, step = %next, "Tracking advanced");

    next != StepId::Delivered
}

// =============================================================================
// Tracker Handle (for external control)
// =============================================================================

/// Handle controlling a running tracker task.
///
/// Hold it for as long as the tracking view is alive. Dropping the handle
/// aborts the task immediately.
#[derive(Debug)]
pub struct TrackerHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl TrackerHandle {
    /// Signals the task to stop and waits for it to finish.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(()).await;
        let _ = (&mut self.task).await;
    }

    /// Whether the task has already stopped on its own.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TrackerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
