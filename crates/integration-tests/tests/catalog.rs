//! Integration tests for catalog listing and pagination.
//!
//! These tests require a running storefront API seeded with the standard
//! 12-product catalog (default page size 10).
//!
//! Run with: cargo test -p madrona-integration-tests -- --ignored

use madrona_integration_tests::fresh_store;

#[tokio::test]
#[ignore = "Requires a running storefront API with the seeded catalog"]
async fn test_first_page_holds_ten_of_twelve_products() {
    let store = fresh_store();

    store.list_products("", 1).await;
    let state = store.product_list().await;

    assert!(state.error.is_empty(), "list failed: {}", state.error);
    assert!(!state.loading);
    assert_eq!(state.products.len(), 10);
    assert_eq!(state.page, 1);
    assert_eq!(state.pages, 2);
}

#[tokio::test]
#[ignore = "Requires a running storefront API with the seeded catalog"]
async fn test_second_page_holds_the_remainder() {
    let store = fresh_store();

    store.list_products("", 2).await;
    let state = store.product_list().await;

    assert!(state.error.is_empty(), "list failed: {}", state.error);
    assert_eq!(state.products.len(), 2);
    assert_eq!(state.page, 2);
    assert_eq!(state.pages, 2);
}

#[tokio::test]
#[ignore = "Requires a running storefront API with the seeded catalog"]
async fn test_keyword_filter_narrows_the_catalog() {
    let store = fresh_store();

    store.list_products("zzz-no-such-product", 1).await;
    let state = store.product_list().await;

    assert!(state.error.is_empty(), "list failed: {}", state.error);
    assert!(state.products.is_empty());
}

#[tokio::test]
#[ignore = "Requires a running storefront API with the seeded catalog"]
async fn test_top_products_are_rated() {
    let store = fresh_store();

    store.list_top_products().await;
    let state = store.product_list().await;

    assert!(state.error.is_empty(), "top list failed: {}", state.error);
    assert!(!state.top_products.is_empty());
}
