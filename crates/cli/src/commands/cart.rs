//! Cart commands.

use madrona_core::{ProductId, ShippingAddress};
use madrona_storefront::Store;

use super::{CommandError, fail_on_error};

/// Add a product to the cart.
pub async fn add(store: &Store, product_id: &str, qty: u32) -> Result<(), CommandError> {
    store.add_cart_line(&ProductId::new(product_id), qty).await;
    let state = store.cart().await;
    fail_on_error(&state.error)?;

    println!("Cart has {} items", state.item_count());
    Ok(())
}

/// Remove a product from the cart.
pub async fn remove(store: &Store, product_id: &str) -> Result<(), CommandError> {
    store.remove_cart_line(&ProductId::new(product_id)).await;
    let state = store.cart().await;
    fail_on_error(&state.error)?;

    println!("Cart has {} items", state.item_count());
    Ok(())
}

/// Show the cart and its checkout totals.
pub async fn show(store: &Store) -> Result<(), CommandError> {
    let state = store.cart().await;

    if state.cart_items.is_empty() {
        println!("Cart is empty");
    }
    for line in &state.cart_items {
        println!(
            "{}  {} x {:>8}  {}",
            line.product,
            line.qty,
            line.price,
            line.name
        );
    }

    let totals = state.totals();
    println!("Items:    {:>10}", totals.items_price);
    println!("Shipping: {:>10}", totals.shipping_price);
    println!("Tax:      {:>10}", totals.tax_price);
    println!("Total:    {:>10}", totals.total_price);

    if let Some(address) = &state.shipping_address {
        println!(
            "Ship to: {}, {} {}, {}",
            address.address, address.city, address.postal_code, address.country
        );
    }
    if let Some(method) = &state.payment_method {
        println!("Pay with: {method}");
    }
    Ok(())
}

/// Save the shipping address.
pub async fn ship(
    store: &Store,
    address: String,
    city: String,
    postal_code: String,
    country: String,
) -> Result<(), CommandError> {
    store
        .save_shipping_address(ShippingAddress {
            address,
            city,
            postal_code,
            country,
        })
        .await;
    println!("Shipping address saved");
    Ok(())
}

/// Save the payment method.
pub async fn pay_method(store: &Store, method: &str) -> Result<(), CommandError> {
    store.save_payment_method(method).await;
    println!("Payment method saved");
    Ok(())
}
