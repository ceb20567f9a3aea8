//! End-to-end storefront scenarios: browse → cart → checkout → track.

use std::time::Duration;

use storefront_core::{OrderStatus, Product, Rating, StepId};
use storefront_store::{checkout, CartStore, FavoritesStore, OrderStore, Tracker, TrackerConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn product(id: u64, title: &str, price_cents: i64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price_cents,
        image: format!("https://img.example.com/{}.png", id),
        category: "electronics".to_string(),
        rating: Rating {
            rate: 4.3,
            count: 68,
        },
    }
}

/// Cart with A ($10 x 2) and B ($5 x 1) checks out into a pending order
/// totalling $25.00, with only `order_placed` completed; the cart ends up
/// empty.
#[test]
fn scenario_checkout_produces_fresh_pending_order() {
    init_tracing();
    let cart = CartStore::new();
    let orders = OrderStore::new();

    let a = product(1, "Product A", 1000);
    let b = product(2, "Product B", 500);
    cart.add_product(&a);
    cart.add_product(&a);
    cart.add_product(&b);
    assert_eq!(cart.total_price().cents(), 2500);

    let order_id = checkout(&cart, &orders).expect("cart is not empty");

    let order = orders.get(&order_id).expect("order just created");
    assert_eq!(order.total_price_cents, 2500);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.tracking.current, StepId::OrderPlaced);

    assert!(order.tracking.steps[0].completed);
    assert!(order.tracking.steps[0].date.is_some());
    for step in &order.tracking.steps[1..] {
        assert!(!step.completed, "step {} must start incomplete", step.id);
        assert!(step.date.is_none());
    }

    assert!(cart.is_empty());
    assert_eq!(orders.orders()[0].id, order_id);
}

/// Jumping a fresh order straight to `shipped` completes only that step;
/// the skipped `confirmed`/`processing` steps stay incomplete.
#[test]
fn scenario_out_of_order_transition_skips_intermediate_steps() {
    init_tracing();
    let cart = CartStore::new();
    let orders = OrderStore::new();
    cart.add_product(&product(1, "Product A", 1000));
    let order_id = checkout(&cart, &orders).unwrap();

    orders.update_status(&order_id, OrderStatus::Shipped);

    let order = orders.get(&order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Shipped);
    assert_eq!(order.tracking.current, StepId::Shipped);

    let shipped = order.tracking.step(StepId::Shipped).unwrap();
    assert!(shipped.completed);
    assert!(shipped.date.is_some());

    assert!(!order.tracking.step(StepId::Confirmed).unwrap().completed);
    assert!(!order.tracking.step(StepId::Processing).unwrap().completed);
}

/// Cancelling flips the status and nothing else; tracking stays exactly
/// as it was before.
#[test]
fn scenario_cancel_preserves_tracking() {
    init_tracing();
    let cart = CartStore::new();
    let orders = OrderStore::new();
    cart.add_product(&product(1, "Product A", 1000));
    let order_id = checkout(&cart, &orders).unwrap();

    orders.update_status(&order_id, OrderStatus::Processing);
    let tracking_before = orders.get(&order_id).unwrap().tracking;

    orders.cancel(&order_id);

    let order = orders.get(&order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
    assert_eq!(order.tracking, tracking_before);
}

/// Favorites are independent of the cart and orders; toggling twice
/// restores the original membership.
#[test]
fn scenario_favorites_do_not_interact_with_checkout() {
    init_tracing();
    let cart = CartStore::new();
    let orders = OrderStore::new();
    let favorites = FavoritesStore::new();

    let a = product(1, "Product A", 1000);
    favorites.toggle(&a);
    cart.add_product(&a);
    checkout(&cart, &orders).unwrap();

    assert!(favorites.is_favorite(a.id));
    favorites.toggle(&a);
    assert!(!favorites.is_favorite(a.id));
}

/// A view subscribes, observes the checkout, and releases its
/// subscription by dropping the receiver.
#[tokio::test]
async fn scenario_subscription_observes_checkout() {
    init_tracing();
    let cart = CartStore::new();
    let orders = OrderStore::new();

    let mut cart_rx = cart.subscribe();
    let mut orders_rx = orders.subscribe();

    cart.add_product(&product(1, "Product A", 1000));
    cart_rx.changed().await.unwrap();

    let order_id = checkout(&cart, &orders).unwrap();

    orders_rx.changed().await.unwrap();
    assert_eq!(orders_rx.borrow().orders()[0].id, order_id);

    cart_rx.changed().await.unwrap();
    assert!(cart_rx.borrow().is_empty());

    drop(cart_rx);
    drop(orders_rx);
    // Stores keep working after their subscribers are gone
    cart.add_product(&product(2, "Product B", 500));
    assert_eq!(cart.item_count(), 1);
}

/// The full demo loop: checkout, watch the tracker walk the order to
/// delivered, then confirm it stops on its own.
#[tokio::test(start_paused = true)]
async fn scenario_tracker_drives_order_to_delivered() {
    init_tracing();
    let cart = CartStore::new();
    let orders = OrderStore::new();
    cart.add_product(&product(1, "Product A", 1000));
    let order_id = checkout(&cart, &orders).unwrap();

    let handle = Tracker::spawn(
        orders.clone(),
        order_id.clone(),
        TrackerConfig {
            tick_interval: Duration::from_secs(5),
        },
    );

    tokio::time::sleep(Duration::from_secs(26)).await;

    let order = orders.get(&order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);
    assert!(order.tracking.steps.iter().all(|s| s.completed));
    assert_eq!(order.tracking.current, StepId::Delivered);
    assert!(handle.is_finished());
}
