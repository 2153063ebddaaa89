//! Order entities: checkout drafts, durable orders, and payment receipts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::{CartLine, CartTotals, ShippingAddress};
use super::email::Email;
use super::id::{OrderId, ProductId, UserId};

/// One line of an order, snapshotted from the cart at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product name at checkout time.
    pub name: String,
    /// Quantity ordered.
    pub qty: u32,
    /// Product image at checkout time.
    pub image: String,
    /// Unit price at checkout time.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// The referenced product.
    pub product: ProductId,
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.name.clone(),
            qty: line.qty,
            image: line.image.clone(),
            price: line.price,
            product: line.product.clone(),
        }
    }
}

/// Payment receipt recorded when an order is paid.
///
/// Field names are fixed by the payment provider's callback payload, so this
/// type keeps them verbatim rather than renaming to camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    /// Provider transaction ID.
    pub id: String,
    /// Provider status string (e.g. `COMPLETED`).
    pub status: String,
    /// Provider-supplied update timestamp.
    pub update_time: String,
    /// Payer email address.
    pub email_address: String,
}

/// The customer an order belongs to.
///
/// Listing endpoints return the bare user reference; the detail endpoint
/// expands it into a contact record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderCustomer {
    /// Expanded contact record from the order detail endpoint.
    Profile(OrderContact),
    /// Bare user reference.
    Id(UserId),
}

/// Expanded customer contact data on an order detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderContact {
    /// Document identifier.
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Customer name.
    pub name: String,
    /// Customer email.
    pub email: Email,
}

/// Client-to-server checkout payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Lines being ordered.
    pub order_items: Vec<OrderItem>,
    /// Shipping destination.
    pub shipping_address: ShippingAddress,
    /// Selected payment method.
    pub payment_method: String,
    /// Computed checkout totals.
    #[serde(flatten)]
    pub totals: CartTotals,
}

/// A durable order.
///
/// Once paid, an order is immutable except for the delivered flag, and the
/// delivered flag may only transition true after paid is true. Both
/// transitions happen server-side; the client records what it is told.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Document identifier.
    #[serde(rename = "_id")]
    pub id: OrderId,
    /// Owning customer.
    pub user: OrderCustomer,
    /// Snapshot of the cart at checkout.
    pub order_items: Vec<OrderItem>,
    /// Shipping destination.
    pub shipping_address: ShippingAddress,
    /// Selected payment method.
    pub payment_method: String,
    /// Sum of line prices.
    #[serde(with = "rust_decimal::serde::float", default)]
    pub items_price: Decimal,
    /// Shipping fee.
    #[serde(with = "rust_decimal::serde::float", default)]
    pub shipping_price: Decimal,
    /// Tax.
    #[serde(with = "rust_decimal::serde::float", default)]
    pub tax_price: Decimal,
    /// Grand total.
    #[serde(with = "rust_decimal::serde::float", default)]
    pub total_price: Decimal,
    /// Whether payment has been recorded.
    #[serde(default)]
    pub is_paid: bool,
    /// When payment was recorded.
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    /// Payment receipt, present once paid.
    #[serde(default)]
    pub payment_result: Option<PaymentResult>,
    /// Whether the order has been delivered.
    #[serde(default)]
    pub is_delivered: bool,
    /// When delivery was recorded.
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
}
