//! Single-product slice backing the product page.

use madrona_core::Product;

use super::lifecycle::Phase;

/// Product detail state.
#[derive(Debug, Clone)]
pub struct ProductDetailsState {
    /// The fetched product, `None` before the first fetch completes.
    pub product: Option<Product>,
    /// A request is in flight.
    pub loading: bool,
    /// Message of the last failure, empty when none.
    pub error: String,
}

impl Default for ProductDetailsState {
    fn default() -> Self {
        Self {
            product: None,
            loading: true,
            error: String::new(),
        }
    }
}

/// Result of a fulfilled detail operation.
#[derive(Debug, Clone)]
pub enum ProductDetailsEvent {
    /// The product was fetched; replaces the record wholesale.
    Fetched(Product),
}

impl ProductDetailsState {
    /// Fold one lifecycle phase into the state.
    pub fn apply(&mut self, phase: Phase<ProductDetailsEvent>) {
        match phase {
            Phase::Pending => {
                self.loading = true;
                self.error.clear();
            }
            Phase::Rejected(message) => {
                self.loading = false;
                self.error = message;
            }
            Phase::Fulfilled(ProductDetailsEvent::Fetched(product)) => {
                self.loading = false;
                self.product = Some(product);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use madrona_core::ProductId;
    use rust_decimal::Decimal;

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: "Airpods".to_owned(),
            price: Decimal::new(8999, 2),
            image: "/images/airpods.jpg".to_owned(),
            brand: "Apple".to_owned(),
            category: "Electronics".to_owned(),
            count_in_stock: 10,
            description: String::new(),
            rating: 4.5,
            num_reviews: 12,
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_fetched_replaces_record() {
        let mut state = ProductDetailsState::default();
        assert!(state.loading);

        state.apply(Phase::Pending);
        state.apply(Phase::Fulfilled(ProductDetailsEvent::Fetched(product("p1"))));

        assert!(!state.loading);
        assert_eq!(
            state.product.as_ref().map(|p| p.id.as_str()),
            Some("p1")
        );
    }

    #[test]
    fn test_rejected_keeps_previous_product() {
        let mut state = ProductDetailsState::default();
        state.apply(Phase::Fulfilled(ProductDetailsEvent::Fetched(product("p1"))));

        state.apply(Phase::Pending);
        state.apply(Phase::Rejected("Product not found".to_owned()));

        assert!(state.product.is_some());
        assert_eq!(state.error, "Product not found");
    }
}
