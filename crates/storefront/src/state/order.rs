//! Order slice: checkout, order detail, payment and delivery flags, and
//! the order collections.

use madrona_core::Order;

use super::lifecycle::Phase;

/// Order state.
#[derive(Debug, Clone)]
pub struct OrderState {
    /// Order returned by checkout; signals the view layer to navigate to it.
    pub created_order: Option<Order>,
    /// Order loaded for the detail screen.
    pub order_details: Option<Order>,
    /// The caller's own orders.
    pub my_orders: Vec<Order>,
    /// All orders, for the admin list screen.
    pub orders: Vec<Order>,
    /// A request is in flight.
    pub loading: bool,
    /// Message of the last failure, empty when none.
    pub error: String,
    /// One-shot flag set when checkout completed.
    pub success: bool,
    /// Payment was recorded for the order on the detail screen.
    pub payment_success: bool,
    /// Delivery was recorded for the order on the detail screen.
    pub deliver_success: bool,
}

impl Default for OrderState {
    fn default() -> Self {
        Self {
            created_order: None,
            order_details: None,
            my_orders: Vec::new(),
            orders: Vec::new(),
            loading: true,
            error: String::new(),
            success: false,
            payment_success: false,
            deliver_success: false,
        }
    }
}

/// Result of a fulfilled order operation.
#[derive(Debug, Clone)]
pub enum OrderEvent {
    /// Checkout succeeded.
    Created(Order),
    /// The order detail was fetched; replaces the record wholesale.
    DetailsFetched(Order),
    /// Payment was recorded.
    Paid,
    /// Delivery was recorded.
    Delivered,
    /// The caller's orders were listed; replaces the collection.
    MineListed(Vec<Order>),
    /// All orders were listed; replaces the collection.
    AllListed(Vec<Order>),
}

impl OrderState {
    /// Fold one lifecycle phase into the state.
    pub fn apply(&mut self, phase: Phase<OrderEvent>) {
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
                    OrderEvent::Created(order) => {
                        self.created_order = Some(order);
                        self.success = true;
                    }
                    OrderEvent::DetailsFetched(order) => self.order_details = Some(order),
                    OrderEvent::Paid => self.payment_success = true,
                    OrderEvent::Delivered => self.deliver_success = true,
                    OrderEvent::MineListed(orders) => self.my_orders = orders,
                    OrderEvent::AllListed(orders) => self.orders = orders,
                }
            }
        }
    }

    /// Clear only the order collections. Detail state and completion flags
    /// survive so an in-progress checkout screen is not disturbed.
    pub fn reset_orders(&mut self) {
        self.my_orders.clear();
        self.orders.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use madrona_core::{OrderCustomer, OrderId, ShippingAddress, UserId};
    use rust_decimal::Decimal;

    fn order(id: &str) -> Order {
        Order {
            id: OrderId::new(id),
            user: OrderCustomer::Id(UserId::new("u1")),
            order_items: Vec::new(),
            shipping_address: ShippingAddress {
                address: "1 Main St".to_owned(),
                city: "Springfield".to_owned(),
                postal_code: "12345".to_owned(),
                country: "USA".to_owned(),
            },
            payment_method: "PayPal".to_owned(),
            items_price: Decimal::ZERO,
            shipping_price: Decimal::ZERO,
            tax_price: Decimal::ZERO,
            total_price: Decimal::ZERO,
            is_paid: false,
            paid_at: None,
            payment_result: None,
            is_delivered: false,
            delivered_at: None,
        }
    }

    #[test]
    fn test_created_sets_success_and_order() {
        let mut state = OrderState::default();
        state.apply(Phase::Pending);
        state.apply(Phase::Fulfilled(OrderEvent::Created(order("o1"))));

        assert!(state.success);
        assert!(!state.loading);
        assert_eq!(
            state.created_order.as_ref().map(|o| o.id.as_str()),
            Some("o1")
        );
    }

    #[test]
    fn test_paid_sets_flag_without_touching_details() {
        let mut state = OrderState::default();
        state.apply(Phase::Fulfilled(OrderEvent::DetailsFetched(order("o1"))));

        state.apply(Phase::Pending);
        state.apply(Phase::Fulfilled(OrderEvent::Paid));

        assert!(state.payment_success);
        assert!(state.order_details.is_some());
    }

    #[test]
    fn test_rejected_deliver_leaves_flag_unset() {
        let mut state = OrderState::default();
        state.apply(Phase::Pending);
        state.apply(Phase::Rejected("Order is not paid".to_owned()));

        assert!(!state.deliver_success);
        assert_eq!(state.error, "Order is not paid");
    }

    #[test]
    fn test_reset_orders_clears_only_collections() {
        let mut state = OrderState::default();
        state.apply(Phase::Fulfilled(OrderEvent::DetailsFetched(order("o1"))));
        state.apply(Phase::Fulfilled(OrderEvent::Paid));
        state.apply(Phase::Fulfilled(OrderEvent::MineListed(vec![order("o2")])));
        state.apply(Phase::Fulfilled(OrderEvent::AllListed(vec![order("o3")])));

        state.reset_orders();

        assert!(state.my_orders.is_empty());
        assert!(state.orders.is_empty());
        assert!(state.order_details.is_some());
        assert!(state.payment_success);
    }
}
