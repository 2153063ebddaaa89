//! Catalog entities: products, reviews, and the pagination envelope.
//!
//! Field names follow the storefront API's wire format (camelCase with
//! `_id` identifiers), so these types deserialize straight from responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ProductId, UserId};

/// A customer review, embedded in its product.
///
/// Reviews are owned exclusively by their product and are deleted with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Author of the review.
    pub user: UserId,
    /// Author display name, denormalized at review time.
    pub name: String,
    /// Rating on a 1-5 scale.
    pub rating: u8,
    /// Free-form comment text.
    pub comment: String,
    /// When the review was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for appending a review to a product.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewDraft {
    /// Rating on a 1-5 scale.
    pub rating: u8,
    /// Free-form comment text.
    pub comment: String,
}

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Document identifier.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image path or URL.
    pub image: String,
    /// Brand name.
    pub brand: String,
    /// Category name.
    pub category: String,
    /// Units in stock. Never negative; zero means out of stock.
    pub count_in_stock: u32,
    /// Long-form description.
    pub description: String,
    /// Aggregate rating across reviews.
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews.
    #[serde(default)]
    pub num_reviews: u32,
    /// Reviews, oldest first.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// One page of the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    /// Products on this page.
    pub products: Vec<Product>,
    /// 1-based page number.
    pub page: u32,
    /// Total number of pages.
    pub pages: u32,
}

/// Editable product fields for the admin update operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    /// Display name.
    pub name: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Long-form description.
    pub description: String,
    /// Image path or URL.
    pub image: String,
    /// Brand name.
    pub brand: String,
    /// Category name.
    pub category: String,
    /// Units in stock.
    pub count_in_stock: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_format() {
        let json = r#"{
            "_id": "64f1c0a2b3d4e5f6a7b8c9d0",
            "name": "Airpods Wireless Bluetooth Headphones",
            "price": 89.99,
            "image": "/images/airpods.jpg",
            "brand": "Apple",
            "category": "Electronics",
            "countInStock": 10,
            "description": "Bluetooth technology lets you connect it with compatible devices",
            "rating": 4.5,
            "numReviews": 12,
            "reviews": []
        }"#;

        let product: Product = serde_json::from_str(json).expect("deserialize product");
        assert_eq!(product.id.as_str(), "64f1c0a2b3d4e5f6a7b8c9d0");
        assert_eq!(product.price, Decimal::new(8999, 2));
        assert_eq!(product.count_in_stock, 10);
        assert_eq!(product.num_reviews, 12);
    }

    #[test]
    fn test_product_optional_aggregates_default() {
        // List responses may omit review data entirely.
        let json = r#"{
            "_id": "a1",
            "name": "Sample name",
            "price": 0,
            "image": "/images/sample.jpg",
            "brand": "Sample brand",
            "category": "Sample Category",
            "countInStock": 0,
            "description": "Sample description"
        }"#;

        let product: Product = serde_json::from_str(json).expect("deserialize product");
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.num_reviews, 0);
        assert!(product.reviews.is_empty());
    }

    #[test]
    fn test_product_update_serializes_camel_case() {
        let update = ProductUpdate {
            name: "Logitech Mouse".to_owned(),
            price: Decimal::new(2999, 2),
            description: "Wireless mouse".to_owned(),
            image: "/images/mouse.jpg".to_owned(),
            brand: "Logitech".to_owned(),
            category: "Electronics".to_owned(),
            count_in_stock: 7,
        };

        let value = serde_json::to_value(&update).expect("serialize update");
        assert_eq!(value["countInStock"], 7);
        assert_eq!(value["price"], 29.99);
    }

    #[test]
    fn test_page_wire_format() {
        let json = r#"{"products": [], "page": 2, "pages": 5}"#;
        let page: ProductPage = serde_json::from_str(json).expect("deserialize page");
        assert_eq!(page.page, 2);
        assert_eq!(page.pages, 5);
    }
}
