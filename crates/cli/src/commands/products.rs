//! Catalog commands.

use madrona_core::{ProductId, ProductUpdate, ReviewDraft};
use madrona_storefront::Store;

use super::{CommandError, fail_on_error};

/// List a catalog page.
pub async fn list(store: &Store, keyword: &str, page: u32) -> Result<(), CommandError> {
    store.list_products(keyword, page).await;
    let state = store.product_list().await;
    fail_on_error(&state.error)?;

    println!("Page {} of {}", state.page, state.pages);
    for product in &state.products {
        println!(
            "{}  {:>10}  {:<40}  {} in stock",
            product.id, product.price, product.name, product.count_in_stock
        );
    }
    Ok(())
}

/// Show the top-rated products.
pub async fn top(store: &Store) -> Result<(), CommandError> {
    store.list_top_products().await;
    let state = store.product_list().await;
    fail_on_error(&state.error)?;

    for product in &state.top_products {
        println!(
            "{}  {:.1}★ ({} reviews)  {}",
            product.id, product.rating, product.num_reviews, product.name
        );
    }
    Ok(())
}

/// Show one product with its reviews.
pub async fn show(store: &Store, id: &str) -> Result<(), CommandError> {
    store.get_product_details(&ProductId::new(id)).await;
    let state = store.product_details().await;
    fail_on_error(&state.error)?;

    let Some(product) = state.product else {
        return Err(CommandError::Operation("No product loaded".to_owned()));
    };

    println!("{} ({})", product.name, product.id);
    println!("  {} / {}", product.brand, product.category);
    println!("  {}  -  {} in stock", product.price, product.count_in_stock);
    println!("  {:.1}★ across {} reviews", product.rating, product.num_reviews);
    println!("  {}", product.description);
    for review in &product.reviews {
        println!("  - {}★ {} ({})", review.rating, review.comment, review.name);
    }
    Ok(())
}

/// Create a placeholder product (admin).
pub async fn create(store: &Store) -> Result<(), CommandError> {
    store.create_product().await;
    let state = store.product_list().await;
    fail_on_error(&state.error)?;

    match state.created_product {
        Some(product) => println!("Created {} ({})", product.name, product.id),
        None => println!("Created product"),
    }
    Ok(())
}

/// Update a product's fields (admin).
pub async fn update(store: &Store, id: &str, update: ProductUpdate) -> Result<(), CommandError> {
    store.update_product(&ProductId::new(id), &update).await;
    let state = store.product_list().await;
    fail_on_error(&state.error)?;

    if let Some(product) = state.updated_product {
        println!("Updated {} ({})", product.name, product.id);
    }
    Ok(())
}

/// Delete a product (admin).
pub async fn delete(store: &Store, id: &str) -> Result<(), CommandError> {
    store.delete_product(&ProductId::new(id)).await;
    let state = store.product_list().await;
    fail_on_error(&state.error)?;

    println!("Deleted {id}; catalog now has {} pages", state.pages);
    Ok(())
}

/// Append a review to a product.
pub async fn review(
    store: &Store,
    id: &str,
    rating: u8,
    comment: String,
) -> Result<(), CommandError> {
    if !(1..=5).contains(&rating) {
        return Err(CommandError::InvalidInput(
            "Rating must be between 1 and 5".to_owned(),
        ));
    }

    store
        .create_review(&ProductId::new(id), &ReviewDraft { rating, comment })
        .await;
    let state = store.product_list().await;
    fail_on_error(&state.error)?;

    println!("Review added");
    Ok(())
}
