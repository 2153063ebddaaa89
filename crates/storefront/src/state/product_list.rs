//! Catalog listing slice: the paginated collection, top-rated products, and
//! the admin create/update/delete markers.

use madrona_core::{Product, ProductPage};

use super::lifecycle::Phase;

/// Query the collection was last listed with.
///
/// Remembered so the post-delete re-list can reproduce the page the admin
/// was looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Search keyword, empty for the unfiltered catalog.
    pub keyword: String,
    /// 1-based page number.
    pub page_number: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            page_number: 1,
        }
    }
}

/// Catalog listing state.
#[derive(Debug, Clone)]
pub struct ProductListState {
    /// Products on the current page.
    pub products: Vec<Product>,
    /// 1-based page number of the current page; zero until the first list
    /// completes.
    pub page: u32,
    /// Total number of pages; zero until the first list completes.
    pub pages: u32,
    /// Query behind the current collection.
    pub query: ListQuery,
    /// Top-rated products for the carousel.
    pub top_products: Vec<Product>,
    /// Product created by the admin create operation; signals the view
    /// layer to navigate to its editor.
    pub created_product: Option<Product>,
    /// Product returned by the admin update operation.
    pub updated_product: Option<Product>,
    /// A request is in flight.
    pub loading: bool,
    /// Message of the last failure, empty when none.
    pub error: String,
    /// One-shot flag set when a review was appended.
    pub success: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            page: 0,
            pages: 0,
            query: ListQuery::default(),
            top_products: Vec::new(),
            created_product: None,
            updated_product: None,
            loading: true,
            error: String::new(),
            success: false,
        }
    }
}

/// Result of a fulfilled catalog operation.
#[derive(Debug, Clone)]
pub enum ProductListEvent {
    /// A page was listed; replaces the collection and pagination metadata.
    Listed {
        /// The returned page.
        page: ProductPage,
        /// Query that produced it.
        query: ListQuery,
    },
    /// Top-rated products were listed; replaces the top-products collection.
    TopListed(Vec<Product>),
    /// A placeholder product was created.
    Created(Product),
    /// A product was updated.
    Updated(Product),
    /// A product was deleted. The collection is refreshed by a follow-up
    /// list, not edited locally.
    Deleted,
    /// A review was appended.
    ReviewCreated,
}

impl ProductListState {
    /// Fold one lifecycle phase into the state.
    pub fn apply(&mut self, phase: Phase<ProductListEvent>) {
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
                    ProductListEvent::Listed { page, query } => {
                        self.products = page.products;
                        self.page = page.page;
                        self.pages = page.pages;
                        self.query = query;
                    }
                    ProductListEvent::TopListed(products) => self.top_products = products,
                    ProductListEvent::Created(product) => self.created_product = Some(product),
                    ProductListEvent::Updated(product) => self.updated_product = Some(product),
                    ProductListEvent::Deleted => {}
                    ProductListEvent::ReviewCreated => self.success = true,
                }
            }
        }
    }

    /// Clear one-shot markers before entering an admin screen, so a stale
    /// `created_product` cannot re-trigger editor navigation.
    pub fn reset(&mut self) {
        self.created_product = None;
        self.updated_product = None;
        self.success = false;
        self.error.clear();
    }
}
