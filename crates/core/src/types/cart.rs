//! Cart entities and checkout totals arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::Product;

/// One line in the cart.
///
/// Name, image, and price are snapshots of the product at add-time; the
/// stock count is the value the quantity was validated against. A cart holds
/// at most one line per product reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The referenced product.
    pub product: ProductId,
    /// Product name at add-time.
    pub name: String,
    /// Product image at add-time.
    pub image: String,
    /// Unit price at add-time.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Stock count at add-time. Not re-validated later.
    pub count_in_stock: u32,
    /// Requested quantity, at least 1.
    pub qty: u32,
}

impl CartLine {
    /// Build a line from a freshly fetched product.
    #[must_use]
    pub fn from_product(product: &Product, qty: u32) -> Self {
        Self {
            product: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            count_in_stock: product.count_in_stock,
            qty,
        }
    }

    /// Price of the whole line (unit price times quantity).
    #[must_use]
    pub fn line_price(&self) -> Decimal {
        self.price * Decimal::from(self.qty)
    }
}

/// Shipping destination collected during checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// Country.
    pub country: String,
}

/// Orders above this items subtotal ship free.
const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Flat shipping fee below the free-shipping threshold.
const SHIPPING_FEE: Decimal = Decimal::ONE_HUNDRED;

/// Checkout totals derived from the cart lines.
///
/// Computed client-side at checkout and submitted with the order draft:
/// flat-fee shipping with free shipping above a threshold, 15% tax on the
/// items subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of line prices.
    #[serde(with = "rust_decimal::serde::float")]
    pub items_price: Decimal,
    /// Shipping fee.
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping_price: Decimal,
    /// Tax on the items subtotal.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_price: Decimal,
    /// Grand total.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl CartTotals {
    /// Compute totals for a set of cart lines.
    #[must_use]
    pub fn compute(lines: &[CartLine]) -> Self {
        let items_price: Decimal = lines.iter().map(CartLine::line_price).sum();
        let shipping_price = if items_price > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            SHIPPING_FEE
        };
        // 15% tax, rounded to cents
        let tax_price = (items_price * Decimal::new(15, 2)).round_dp(2);
        let total_price = items_price + shipping_price + tax_price;

        Self {
            items_price,
            shipping_price,
            tax_price,
            total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: Decimal, qty: u32) -> CartLine {
        CartLine {
            product: ProductId::new(id),
            name: format!("product-{id}"),
            image: format!("/images/{id}.jpg"),
            price,
            count_in_stock: 10,
            qty,
        }
    }

    #[test]
    fn test_totals_below_free_shipping() {
        let lines = vec![line("a", Decimal::new(2000, 2), 2)]; // 40.00
        let totals = CartTotals::compute(&lines);
        assert_eq!(totals.items_price, Decimal::new(4000, 2));
        assert_eq!(totals.shipping_price, SHIPPING_FEE);
        assert_eq!(totals.tax_price, Decimal::new(600, 2));
        assert_eq!(totals.total_price, Decimal::new(14_600, 2));
    }

    #[test]
    fn test_totals_above_free_shipping() {
        let lines = vec![line("a", Decimal::new(8999, 2), 2)]; // 179.98
        let totals = CartTotals::compute(&lines);
        assert_eq!(totals.shipping_price, Decimal::ZERO);
        assert_eq!(totals.tax_price, Decimal::new(2700, 2)); // 26.997 rounded
    }

    #[test]
    fn test_totals_empty_cart() {
        let totals = CartTotals::compute(&[]);
        assert_eq!(totals.items_price, Decimal::ZERO);
        assert_eq!(totals.shipping_price, SHIPPING_FEE);
        assert_eq!(totals.total_price, SHIPPING_FEE);
    }

    #[test]
    fn test_cart_line_wire_format() {
        let l = line("64f1", Decimal::new(1050, 2), 3);
        let value = serde_json::to_value(&l).expect("serialize line");
        assert_eq!(value["product"], "64f1");
        assert_eq!(value["countInStock"], 10);
        assert_eq!(value["price"], 10.5);
        assert_eq!(value["qty"], 3);
    }
}
