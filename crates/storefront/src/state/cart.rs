//! Cart slice: lines, shipping address, and payment method.

use madrona_core::{CartLine, CartTotals, ProductId, ShippingAddress};

use super::lifecycle::Phase;

/// Cart state.
///
/// Created empty on first visit, persisted continuously through the cache
/// slots, and cleared only by explicit user action.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    /// Lines, in insertion order. At most one line per product reference.
    pub cart_items: Vec<CartLine>,
    /// Shipping destination collected during checkout.
    pub shipping_address: Option<ShippingAddress>,
    /// Selected payment method.
    pub payment_method: Option<String>,
    /// A request is in flight (the product fetch inside add).
    pub loading: bool,
    /// Message of the last failure, empty when none.
    pub error: String,
}

/// Result of a fulfilled cart operation.
#[derive(Debug, Clone)]
pub enum CartEvent {
    /// A line was added. If a line for the same product exists it is
    /// replaced wholesale - quantity and snapshot fields overwrite the old
    /// line, they are never summed.
    LineAdded(CartLine),
    /// The line for a product was removed; a no-op when absent.
    LineRemoved(ProductId),
    /// The shipping address was saved.
    ShippingSaved(ShippingAddress),
    /// The payment method was saved.
    PaymentMethodSaved(String),
}

impl CartState {
    /// Fold one lifecycle phase into the state.
    pub fn apply(&mut self, phase: Phase<CartEvent>) {
        match phase {
            Phase::Pending => {
                self.loading = true;
                self.error.clear();
            }
            Phase::Rejected(message) => {
                self.loading = false;
                self.error = message;
            }
            Phase::Fulfilled(event) => {
                self.loading = false;
                match event {
                    CartEvent::LineAdded(line) => self.merge_line(line),
                    CartEvent::LineRemoved(product) => {
                        self.cart_items.retain(|l| l.product != product);
                    }
                    CartEvent::ShippingSaved(address) => self.shipping_address = Some(address),
                    CartEvent::PaymentMethodSaved(method) => self.payment_method = Some(method),
                }
            }
        }
    }

    /// Last write wins: an existing line for the same product is replaced
    /// in place, otherwise the line is appended.
    fn merge_line(&mut self, line: CartLine) {
        match self.cart_items.iter_mut().find(|l| l.product == line.product) {
            Some(existing) => *existing = line,
            None => self.cart_items.push(line),
        }
    }

    /// Checkout totals for the current lines.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.cart_items)
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart_items.iter().map(|l| l.qty).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal::Decimal;

    fn line(product: &str, qty: u32) -> CartLine {
        CartLine {
            product: ProductId::new(product),
            name: format!("product-{product}"),
            image: format!("/images/{product}.jpg"),
            price: Decimal::new(1999, 2),
            count_in_stock: 10,
            qty,
        }
    }

    #[test]
    fn test_add_new_line_appends() {
        let mut state = CartState::default();
        state.apply(Phase::Fulfilled(CartEvent::LineAdded(line("a", 2))));
        state.apply(Phase::Fulfilled(CartEvent::LineAdded(line("b", 1))));

        assert_eq!(state.cart_items.len(), 2);
        assert_eq!(state.item_count(), 3);
    }

    #[test]
    fn test_add_existing_line_replaces_not_accumulates() {
        let mut state = CartState::default();
        state.apply(Phase::Fulfilled(CartEvent::LineAdded(line("a", 2))));
        state.apply(Phase::Fulfilled(CartEvent::LineAdded(line("a", 5))));

        assert_eq!(state.cart_items.len(), 1);
        assert_eq!(state.cart_items.first().map(|l| l.qty), Some(5));
    }

    #[test]
    fn test_replace_overwrites_snapshot_fields() {
        let mut state = CartState::default();
        state.apply(Phase::Fulfilled(CartEvent::LineAdded(line("a", 2))));

        let mut newer = line("a", 2);
        newer.price = Decimal::new(1499, 2);
        newer.name = "renamed".to_owned();
        state.apply(Phase::Fulfilled(CartEvent::LineAdded(newer)));

        let only = state.cart_items.first().expect("one line");
        assert_eq!(only.price, Decimal::new(1499, 2));
        assert_eq!(only.name, "renamed");
    }

    #[test]
    fn test_remove_line() {
        let mut state = CartState::default();
        state.apply(Phase::Fulfilled(CartEvent::LineAdded(line("a", 2))));
        state.apply(Phase::Fulfilled(CartEvent::LineRemoved(ProductId::new("a"))));
        assert!(state.cart_items.is_empty());
    }

    #[test]
    fn test_remove_absent_line_is_noop() {
        let mut state = CartState::default();
        state.apply(Phase::Fulfilled(CartEvent::LineAdded(line("a", 2))));
        state.apply(Phase::Fulfilled(CartEvent::LineRemoved(ProductId::new("zzz"))));
        assert_eq!(state.cart_items.len(), 1);
    }

    #[test]
    fn test_rejected_add_leaves_lines_untouched() {
        let mut state = CartState::default();
        state.apply(Phase::Fulfilled(CartEvent::LineAdded(line("a", 2))));

        state.apply(Phase::Pending);
        state.apply(Phase::Rejected("Product not found".to_owned()));

        assert_eq!(state.cart_items.len(), 1);
        assert_eq!(state.error, "Product not found");
    }
}
