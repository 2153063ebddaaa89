//! Checkout and order-management commands.

use chrono::Utc;

use madrona_core::{Order, OrderId, PaymentResult};
use madrona_storefront::Store;

use super::{CommandError, fail_on_error};

/// Check out the current cart.
pub async fn checkout(store: &Store) -> Result<(), CommandError> {
    store.checkout().await;
    let state = store.order().await;
    fail_on_error(&state.error)?;

    if let Some(order) = state.created_order {
        println!("Order {} placed, total {}", order.id, order.total_price);
    }
    Ok(())
}

/// Show one order.
pub async fn show(store: &Store, id: &str) -> Result<(), CommandError> {
    store.get_order_details(&OrderId::new(id)).await;
    let state = store.order().await;
    fail_on_error(&state.error)?;

    if let Some(order) = state.order_details {
        print_order(&order);
    }
    Ok(())
}

/// Record a payment receipt against an order.
pub async fn pay(
    store: &Store,
    id: &str,
    transaction: String,
    status: String,
    payer_email: String,
) -> Result<(), CommandError> {
    let receipt = PaymentResult {
        id: transaction,
        status,
        update_time: Utc::now().to_rfc3339(),
        email_address: payer_email,
    };
    store.pay_order(&OrderId::new(id), &receipt).await;
    let state = store.order().await;
    fail_on_error(&state.error)?;

    println!("Payment recorded for {id}");
    Ok(())
}

/// Mark an order delivered (admin).
pub async fn deliver(store: &Store, id: &str) -> Result<(), CommandError> {
    store.deliver_order(&OrderId::new(id)).await;
    let state = store.order().await;
    fail_on_error(&state.error)?;

    println!("Delivery recorded for {id}");
    Ok(())
}

/// List the caller's own orders.
pub async fn mine(store: &Store) -> Result<(), CommandError> {
    store.list_my_orders().await;
    let state = store.order().await;
    fail_on_error(&state.error)?;

    for order in &state.my_orders {
        print_order_row(order);
    }
    Ok(())
}

/// List all orders (admin).
pub async fn list(store: &Store) -> Result<(), CommandError> {
    store.list_all_orders().await;
    let state = store.order().await;
    fail_on_error(&state.error)?;

    for order in &state.orders {
        print_order_row(order);
    }
    Ok(())
}

fn print_order_row(order: &Order) {
    let paid = if order.is_paid { "paid" } else { "unpaid" };
    let delivered = if order.is_delivered {
        "delivered"
    } else {
        "not delivered"
    };
    println!(
        "{}  {:>10}  {paid:<7} {delivered}",
        order.id, order.total_price
    );
}

fn print_order(order: &Order) {
    println!("Order {}", order.id);
    println!("  Pay with: {}", order.payment_method);
    for item in &order.order_items {
        println!("  {} x {:>8}  {}", item.qty, item.price, item.name);
    }
    println!(
        "  Items {} + shipping {} + tax {} = {}",
        order.items_price, order.shipping_price, order.tax_price, order.total_price
    );
    let ship = &order.shipping_address;
    println!(
        "  Ship to: {}, {} {}, {}",
        ship.address, ship.city, ship.postal_code, ship.country
    );
    match order.paid_at {
        Some(at) => println!("  Paid at {at}"),
        None => println!("  Not paid"),
    }
    match order.delivered_at {
        Some(at) => println!("  Delivered at {at}"),
        None => println!("  Not delivered"),
    }
}
