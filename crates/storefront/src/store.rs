//! The store: dispatch surface over the domain slices.
//!
//! The store owns one lock per slice, the API gateway, and the persisted
//! cache. A dispatch writes the pending phase, performs the single request
//! round trip, then folds the settled phase into the slice - last write
//! wins when concurrent dispatches interleave. Lock guards are never held
//! across a request await, so the store stays responsive while requests
//! are outstanding.
//!
//! Dispatch methods return `()`: failures land in the owning slice's
//! `error` field and are observed there, never propagated to the caller.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::instrument;

use madrona_core::{
    CartLine, CartTotals, Email, Order, OrderDraft, OrderId, OrderItem, PaymentResult, Product,
    ProductId, ProductPage, ProductUpdate, ProfileUpdate, ReviewDraft, ShippingAddress, User,
    UserId, UserInfo, UserUpdate,
};

use crate::api::{ApiClient, ApiMessage};
use crate::config::ClientConfig;
use crate::state::{
    CartEvent, CartState, ListQuery, OrderEvent, OrderState, Phase, ProductDetailsEvent,
    ProductDetailsState, ProductListEvent, ProductListState, UserEvent, UserState,
};
use crate::storage::{CacheSlot, FileCache, PersistedCache, StorageError};

// =============================================================================
// Request payloads
// =============================================================================

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a Email,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a Email,
    password: &'a str,
}

// =============================================================================
// Store
// =============================================================================

/// The client state store.
///
/// Cheaply cloneable; all clones share the same slice state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    api: ApiClient,
    cache: PersistedCache,
    product_list: RwLock<ProductListState>,
    product_details: RwLock<ProductDetailsState>,
    cart: RwLock<CartState>,
    user: RwLock<UserState>,
    order: RwLock<OrderState>,
}

impl Store {
    /// Create a store, seeding cart and session state from the cache slots.
    ///
    /// An absent or undecodable slot seeds the default value.
    #[must_use]
    pub fn new(api: ApiClient, cache: PersistedCache) -> Self {
        let cart = CartState {
            cart_items: cache.load(CacheSlot::CartItems).unwrap_or_default(),
            shipping_address: cache.load(CacheSlot::ShippingAddress),
            payment_method: cache.load(CacheSlot::PaymentMethod),
            ..CartState::default()
        };
        let user = UserState {
            user_info: cache.load(CacheSlot::UserInfo),
            ..UserState::default()
        };

        Self {
            inner: Arc::new(StoreInner {
                api,
                cache,
                product_list: RwLock::new(ProductListState::default()),
                product_details: RwLock::new(ProductDetailsState::default()),
                cart: RwLock::new(cart),
                user: RwLock::new(user),
                order: RwLock::new(OrderState::default()),
            }),
        }
    }

    /// Create a store over a file-backed cache in the configured data
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory cannot be created.
    pub fn from_config(config: &ClientConfig) -> Result<Self, StorageError> {
        let api = ApiClient::new(config);
        let cache = PersistedCache::new(Arc::new(FileCache::new(&config.data_dir)?));
        Ok(Self::new(api, cache))
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Snapshot of the catalog listing slice.
    pub async fn product_list(&self) -> ProductListState {
        self.inner.product_list.read().await.clone()
    }

    /// Snapshot of the product detail slice.
    pub async fn product_details(&self) -> ProductDetailsState {
        self.inner.product_details.read().await.clone()
    }

    /// Snapshot of the cart slice.
    pub async fn cart(&self) -> CartState {
        self.inner.cart.read().await.clone()
    }

    /// Snapshot of the session/user slice.
    pub async fn user(&self) -> UserState {
        self.inner.user.read().await.clone()
    }

    /// Snapshot of the order slice.
    pub async fn order(&self) -> OrderState {
        self.inner.order.read().await.clone()
    }

    /// Bearer token of the current session, if any.
    async fn token(&self) -> Option<String> {
        self.inner
            .user
            .read()
            .await
            .user_info
            .as_ref()
            .map(|info| info.token.clone())
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Load a catalog page, optionally filtered by keyword.
    #[instrument(skip(self))]
    pub async fn list_products(&self, keyword: &str, page_number: u32) {
        self.inner.product_list.write().await.apply(Phase::Pending);

        let path = format!(
            "/products?keyword={}&pageNumber={page_number}",
            urlencoding::encode(keyword)
        );
        let phase = match self.inner.api.get::<ProductPage>(&path, None).await {
            Ok(page) => Phase::Fulfilled(ProductListEvent::Listed {
                page,
                query: ListQuery {
                    keyword: keyword.to_owned(),
                    page_number,
                },
            }),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.product_list.write().await.apply(phase);
    }

    /// Load the top-rated products.
    #[instrument(skip(self))]
    pub async fn list_top_products(&self) {
        self.inner.product_list.write().await.apply(Phase::Pending);

        let phase = match self.inner.api.get::<Vec<Product>>("/products/top", None).await {
            Ok(products) => Phase::Fulfilled(ProductListEvent::TopListed(products)),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.product_list.write().await.apply(phase);
    }

    /// Create a placeholder product (admin). The server fills sample fields;
    /// the result lands in `created_product` for the editor to pick up.
    #[instrument(skip(self))]
    pub async fn create_product(&self) {
        self.inner.product_list.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let phase = match self
            .inner
            .api
            .post::<_, Product>("/products", token.as_deref(), &serde_json::json!({}))
            .await
        {
            Ok(product) => Phase::Fulfilled(ProductListEvent::Created(product)),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.product_list.write().await.apply(phase);
    }

    /// Update a product's editable fields (admin).
    #[instrument(skip(self, id, update), fields(product_id = %id))]
    pub async fn update_product(&self, id: &ProductId, update: &ProductUpdate) {
        self.inner.product_list.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let phase = match self
            .inner
            .api
            .put::<_, Product>(&format!("/products/{id}"), token.as_deref(), update)
            .await
        {
            Ok(product) => Phase::Fulfilled(ProductListEvent::Updated(product)),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.product_list.write().await.apply(phase);
    }

    /// Delete a product (admin). On success the collection is refreshed
    /// with the slice's remembered query so it reflects server truth.
    #[instrument(skip(self, id), fields(product_id = %id))]
    pub async fn delete_product(&self, id: &ProductId) {
        self.inner.product_list.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let result = self
            .inner
            .api
            .delete::<ApiMessage>(&format!("/products/{id}"), token.as_deref())
            .await;

        match result {
            Ok(_) => {
                let query = {
                    let mut list = self.inner.product_list.write().await;
                    list.apply(Phase::Fulfilled(ProductListEvent::Deleted));
                    list.query.clone()
                };
                self.list_products(&query.keyword, query.page_number).await;
            }
            Err(e) => {
                self.inner
                    .product_list
                    .write()
                    .await
                    .apply(Phase::Rejected(e.user_message()));
            }
        }
    }

    /// Append a review to a product.
    #[instrument(skip(self, id, review), fields(product_id = %id))]
    pub async fn create_review(&self, id: &ProductId, review: &ReviewDraft) {
        self.inner.product_list.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let phase = match self
            .inner
            .api
            .post::<_, ApiMessage>(&format!("/products/{id}/reviews"), token.as_deref(), review)
            .await
        {
            Ok(_) => Phase::Fulfilled(ProductListEvent::ReviewCreated),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.product_list.write().await.apply(phase);
    }

    /// Clear the catalog slice's one-shot markers.
    pub async fn reset_product_list(&self) {
        self.inner.product_list.write().await.reset();
    }

    /// Load a single product for the detail screen.
    #[instrument(skip(self, id), fields(product_id = %id))]
    pub async fn get_product_details(&self, id: &ProductId) {
        self.inner.product_details.write().await.apply(Phase::Pending);

        let phase = match self
            .inner
            .api
            .get::<Product>(&format!("/products/{id}"), None)
            .await
        {
            Ok(product) => Phase::Fulfilled(ProductDetailsEvent::Fetched(product)),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.product_details.write().await.apply(phase);
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add a line to the cart.
    ///
    /// Fetches the current product so the line carries a fresh snapshot,
    /// validates the quantity against stock at add-time only, then merges:
    /// an existing line for the same product is replaced wholesale.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_cart_line(&self, product_id: &ProductId, qty: u32) {
        self.inner.cart.write().await.apply(Phase::Pending);

        let phase = if qty == 0 {
            Phase::Rejected("Quantity must be at least 1".to_owned())
        } else {
            match self
                .inner
                .api
                .get::<Product>(&format!("/products/{product_id}"), None)
                .await
            {
                Ok(product) if qty > product.count_in_stock => Phase::Rejected(format!(
                    "Only {} of {} in stock",
                    product.count_in_stock, product.name
                )),
                Ok(product) => Phase::Fulfilled(CartEvent::LineAdded(CartLine::from_product(
                    &product, qty,
                ))),
                Err(e) => Phase::Rejected(e.user_message()),
            }
        };

        let mut cart = self.inner.cart.write().await;
        cart.apply(phase);
        self.inner.cache.store(CacheSlot::CartItems, &cart.cart_items);
    }

    /// Remove the line for a product; a no-op when absent.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_cart_line(&self, product_id: &ProductId) {
        let mut cart = self.inner.cart.write().await;
        cart.apply(Phase::Fulfilled(CartEvent::LineRemoved(product_id.clone())));
        self.inner.cache.store(CacheSlot::CartItems, &cart.cart_items);
    }

    /// Save the shipping address for checkout.
    #[instrument(skip(self, address))]
    pub async fn save_shipping_address(&self, address: ShippingAddress) {
        let mut cart = self.inner.cart.write().await;
        cart.apply(Phase::Fulfilled(CartEvent::ShippingSaved(address.clone())));
        self.inner.cache.store(CacheSlot::ShippingAddress, &address);
    }

    /// Save the payment method for checkout.
    #[instrument(skip(self))]
    pub async fn save_payment_method(&self, method: &str) {
        let method = method.to_owned();
        let mut cart = self.inner.cart.write().await;
        cart.apply(Phase::Fulfilled(CartEvent::PaymentMethodSaved(method.clone())));
        self.inner.cache.store(CacheSlot::PaymentMethod, &method);
    }

    // =========================================================================
    // Session and users
    // =========================================================================

    /// Authenticate and persist the session on success.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &Email, password: &str) {
        self.inner.user.write().await.apply(Phase::Pending);

        let body = LoginRequest { email, password };
        match self
            .inner
            .api
            .post::<_, UserInfo>("/users/login", None, &body)
            .await
        {
            Ok(info) => {
                self.inner.cache.store(CacheSlot::UserInfo, &info);
                self.inner
                    .user
                    .write()
                    .await
                    .apply(Phase::Fulfilled(UserEvent::LoggedIn(info)));
            }
            Err(e) => {
                self.inner
                    .user
                    .write()
                    .await
                    .apply(Phase::Rejected(e.user_message()));
            }
        }
    }

    /// Register a new account and persist the session on success.
    #[instrument(skip(self, password))]
    pub async fn register(&self, name: &str, email: &Email, password: &str) {
        self.inner.user.write().await.apply(Phase::Pending);

        let body = RegisterRequest {
            name,
            email,
            password,
        };
        match self.inner.api.post::<_, UserInfo>("/users", None, &body).await {
            Ok(info) => {
                self.inner.cache.store(CacheSlot::UserInfo, &info);
                self.inner
                    .user
                    .write()
                    .await
                    .apply(Phase::Fulfilled(UserEvent::Registered(info)));
            }
            Err(e) => {
                self.inner
                    .user
                    .write()
                    .await
                    .apply(Phase::Rejected(e.user_message()));
            }
        }
    }

    /// Load the caller's own profile.
    #[instrument(skip(self))]
    pub async fn get_profile(&self) {
        self.inner.user.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let phase = match self
            .inner
            .api
            .get::<User>("/users/profile", token.as_deref())
            .await
        {
            Ok(user) => Phase::Fulfilled(UserEvent::DetailsFetched(user)),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.user.write().await.apply(phase);
    }

    /// Update the caller's own profile and persist the refreshed session.
    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &ProfileUpdate) {
        self.inner.user.write().await.apply(Phase::Pending);

        let token = self.token().await;
        match self
            .inner
            .api
            .put::<_, UserInfo>("/users/profile", token.as_deref(), update)
            .await
        {
            Ok(info) => {
                self.inner.cache.store(CacheSlot::UserInfo, &info);
                self.inner
                    .user
                    .write()
                    .await
                    .apply(Phase::Fulfilled(UserEvent::ProfileUpdated(info)));
            }
            Err(e) => {
                self.inner
                    .user
                    .write()
                    .await
                    .apply(Phase::Rejected(e.user_message()));
            }
        }
    }

    /// Load one user's record (admin).
    #[instrument(skip(self, id), fields(user_id = %id))]
    pub async fn get_user_details(&self, id: &UserId) {
        self.inner.user.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let phase = match self
            .inner
            .api
            .get::<User>(&format!("/users/{id}"), token.as_deref())
            .await
        {
            Ok(user) => Phase::Fulfilled(UserEvent::DetailsFetched(user)),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.user.write().await.apply(phase);
    }

    /// List all users (admin).
    #[instrument(skip(self))]
    pub async fn list_users(&self) {
        self.inner.user.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let phase = match self.inner.api.get::<Vec<User>>("/users", token.as_deref()).await {
            Ok(users) => Phase::Fulfilled(UserEvent::Listed(users)),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.user.write().await.apply(phase);
    }

    /// Delete a user (admin). On success the collection is refreshed so it
    /// reflects server truth.
    #[instrument(skip(self, id), fields(user_id = %id))]
    pub async fn delete_user(&self, id: &UserId) {
        self.inner.user.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let result = self
            .inner
            .api
            .delete::<ApiMessage>(&format!("/users/{id}"), token.as_deref())
            .await;

        match result {
            Ok(_) => {
                self.inner
                    .user
                    .write()
                    .await
                    .apply(Phase::Fulfilled(UserEvent::Deleted));
                self.list_users().await;
            }
            Err(e) => {
                self.inner
                    .user
                    .write()
                    .await
                    .apply(Phase::Rejected(e.user_message()));
            }
        }
    }

    /// Update a user (admin). On success the record is re-fetched so the
    /// edit screen shows server truth.
    #[instrument(skip(self, id, update), fields(user_id = %id))]
    pub async fn update_user(&self, id: &UserId, update: &UserUpdate) {
        self.inner.user.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let result = self
            .inner
            .api
            .put::<_, User>(&format!("/users/{id}"), token.as_deref(), update)
            .await;

        match result {
            Ok(_) => {
                self.inner
                    .user
                    .write()
                    .await
                    .apply(Phase::Fulfilled(UserEvent::Updated));
                self.get_user_details(id).await;
            }
            Err(e) => {
                self.inner
                    .user
                    .write()
                    .await
                    .apply(Phase::Rejected(e.user_message()));
            }
        }
    }

    /// Sign out: drop the persisted session and clear the session slice,
    /// then reset the order and user collections so a signed-out user's
    /// data cannot leak into the next session.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        self.inner.cache.remove(CacheSlot::UserInfo);
        self.inner.user.write().await.logout();
        self.inner.order.write().await.reset_orders();
        self.inner.user.write().await.reset_users();
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Check out the current cart: assemble an order draft from the cart
    /// lines, shipping address, payment method, and computed totals, then
    /// submit it.
    #[instrument(skip(self))]
    pub async fn checkout(&self) {
        let (items, shipping, payment) = {
            let cart = self.inner.cart.read().await;
            (
                cart.cart_items.clone(),
                cart.shipping_address.clone(),
                cart.payment_method.clone(),
            )
        };

        if items.is_empty() {
            self.inner
                .order
                .write()
                .await
                .apply(Phase::Rejected("Cart is empty".to_owned()));
            return;
        }
        let Some(shipping_address) = shipping else {
            self.inner
                .order
                .write()
                .await
                .apply(Phase::Rejected("No shipping address on the cart".to_owned()));
            return;
        };
        let Some(payment_method) = payment else {
            self.inner
                .order
                .write()
                .await
                .apply(Phase::Rejected("No payment method selected".to_owned()));
            return;
        };

        let draft = OrderDraft {
            order_items: items.iter().map(OrderItem::from).collect(),
            shipping_address,
            payment_method,
            totals: CartTotals::compute(&items),
        };
        self.create_order(&draft).await;
    }

    /// Submit an order draft.
    #[instrument(skip(self, draft))]
    pub async fn create_order(&self, draft: &OrderDraft) {
        self.inner.order.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let phase = match self
            .inner
            .api
            .post::<_, Order>("/orders", token.as_deref(), draft)
            .await
        {
            Ok(order) => Phase::Fulfilled(OrderEvent::Created(order)),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.order.write().await.apply(phase);
    }

    /// Load one order for the detail screen.
    #[instrument(skip(self, id), fields(order_id = %id))]
    pub async fn get_order_details(&self, id: &OrderId) {
        self.inner.order.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let phase = match self
            .inner
            .api
            .get::<Order>(&format!("/orders/{id}"), token.as_deref())
            .await
        {
            Ok(order) => Phase::Fulfilled(OrderEvent::DetailsFetched(order)),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.order.write().await.apply(phase);
    }

    /// Record a payment receipt against an order.
    #[instrument(skip(self, id, receipt), fields(order_id = %id))]
    pub async fn pay_order(&self, id: &OrderId, receipt: &PaymentResult) {
        self.inner.order.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let phase = match self
            .inner
            .api
            .put::<_, Order>(&format!("/orders/{id}/pay"), token.as_deref(), receipt)
            .await
        {
            Ok(_) => Phase::Fulfilled(OrderEvent::Paid),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.order.write().await.apply(phase);
    }

    /// Mark an order delivered (admin). The server rejects orders that are
    /// not yet paid; the rejection lands in `error` and the flag stays
    /// false.
    #[instrument(skip(self, id), fields(order_id = %id))]
    pub async fn deliver_order(&self, id: &OrderId) {
        self.inner.order.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let phase = match self
            .inner
            .api
            .put::<_, Order>(
                &format!("/orders/{id}/deliver"),
                token.as_deref(),
                &serde_json::json!({}),
            )
            .await
        {
            Ok(_) => Phase::Fulfilled(OrderEvent::Delivered),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.order.write().await.apply(phase);
    }

    /// List the caller's own orders.
    #[instrument(skip(self))]
    pub async fn list_my_orders(&self) {
        self.inner.order.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let phase = match self
            .inner
            .api
            .get::<Vec<Order>>("/orders/myorders", token.as_deref())
            .await
        {
            Ok(orders) => Phase::Fulfilled(OrderEvent::MineListed(orders)),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.order.write().await.apply(phase);
    }

    /// List all orders (admin).
    #[instrument(skip(self))]
    pub async fn list_all_orders(&self) {
        self.inner.order.write().await.apply(Phase::Pending);

        let token = self.token().await;
        let phase = match self.inner.api.get::<Vec<Order>>("/orders", token.as_deref()).await {
            Ok(orders) => Phase::Fulfilled(OrderEvent::AllListed(orders)),
            Err(e) => Phase::Rejected(e.user_message()),
        };

        self.inner.order.write().await.apply(phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use rust_decimal::Decimal;
    use url::Url;

    use madrona_core::OrderCustomer;

    use crate::storage::MemoryCache;

    /// A store over an in-memory cache and an unreachable API root. Tests
    /// here exercise only the offline dispatches.
    fn memory_store() -> (Store, PersistedCache) {
        let config = ClientConfig {
            api_url: Url::parse("http://localhost:9/api").expect("valid url"),
            data_dir: PathBuf::from("unused"),
        };
        let cache = PersistedCache::new(Arc::new(MemoryCache::new()));
        let store = Store::new(ApiClient::new(&config), cache.clone());
        (store, cache)
    }

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

    fn session() -> UserInfo {
        UserInfo {
            id: UserId::new("u1"),
            name: "Jo Smith".to_owned(),
            email: Email::parse("jo@example.com").expect("valid email"),
            is_admin: true,
            token: "token-abc".to_owned(),
        }
    }

    fn sample_order(id: &str) -> Order {
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

    #[tokio::test]
    async fn test_seeds_state_from_cache_slots() {
        let cache = PersistedCache::new(Arc::new(MemoryCache::new()));
        cache.store(CacheSlot::CartItems, &vec![line("a", 2)]);
        cache.store(CacheSlot::PaymentMethod, &"PayPal".to_owned());
        cache.store(CacheSlot::UserInfo, &session());

        let config = ClientConfig {
            api_url: Url::parse("http://localhost:9/api").expect("valid url"),
            data_dir: PathBuf::from("unused"),
        };
        let store = Store::new(ApiClient::new(&config), cache);

        let cart = store.cart().await;
        assert_eq!(cart.cart_items.len(), 1);
        assert_eq!(cart.payment_method.as_deref(), Some("PayPal"));
        assert!(cart.shipping_address.is_none());

        let user = store.user().await;
        assert_eq!(
            user.user_info.as_ref().map(|u| u.id.as_str()),
            Some("u1")
        );
    }

    #[tokio::test]
    async fn test_remove_cart_line_mirrors_slot() {
        let (store, cache) = memory_store();
        {
            let mut cart = store.inner.cart.write().await;
            cart.cart_items = vec![line("a", 2), line("b", 1)];
        }

        store.remove_cart_line(&ProductId::new("a")).await;

        let in_memory = store.cart().await.cart_items;
        assert_eq!(in_memory.len(), 1);
        let persisted: Vec<CartLine> = cache.load(CacheSlot::CartItems).expect("slot present");
        assert_eq!(persisted, in_memory);
    }

    #[tokio::test]
    async fn test_save_shipping_and_payment_mirror_slots() {
        let (store, cache) = memory_store();

        let address = ShippingAddress {
            address: "1 Main St".to_owned(),
            city: "Springfield".to_owned(),
            postal_code: "12345".to_owned(),
            country: "USA".to_owned(),
        };
        store.save_shipping_address(address.clone()).await;
        store.save_payment_method("PayPal").await;

        let persisted_address: ShippingAddress =
            cache.load(CacheSlot::ShippingAddress).expect("slot present");
        assert_eq!(persisted_address, address);

        let persisted_method: String =
            cache.load(CacheSlot::PaymentMethod).expect("slot present");
        assert_eq!(persisted_method, "PayPal");
    }

    #[tokio::test]
    async fn test_add_cart_line_rejects_zero_quantity_before_any_request() {
        let (store, cache) = memory_store();

        store.add_cart_line(&ProductId::new("p1"), 0).await;

        let cart = store.cart().await;
        assert!(cart.cart_items.is_empty());
        assert_eq!(cart.error, "Quantity must be at least 1");
        assert!(!cart.loading);
        // The mirror still matches the (empty) in-memory lines.
        let persisted: Vec<CartLine> = cache.load(CacheSlot::CartItems).expect("slot present");
        assert!(persisted.is_empty());
    }

    #[tokio::test]
    async fn test_logout_cascades_resets_and_drops_session_slot() {
        let (store, cache) = memory_store();
        cache.store(CacheSlot::UserInfo, &session());
        {
            let mut user = store.inner.user.write().await;
            user.user_info = Some(session());
            user.users = vec![User {
                id: UserId::new("u2"),
                name: "Sam Lee".to_owned(),
                email: Email::parse("sam@example.com").expect("valid email"),
                is_admin: false,
            }];
        }
        {
            let mut order = store.inner.order.write().await;
            order.my_orders = vec![sample_order("o1")];
            order.orders = vec![sample_order("o2")];
        }

        store.logout().await;

        let user = store.user().await;
        assert!(user.user_info.is_none());
        assert!(user.user_details.is_none());
        assert!(user.users.is_empty());

        let order = store.order().await;
        assert!(order.my_orders.is_empty());
        assert!(order.orders.is_empty());

        assert!(cache.load::<UserInfo>(CacheSlot::UserInfo).is_none());
    }

    #[tokio::test]
    async fn test_checkout_requires_cart_lines_and_addresses() {
        let (store, _cache) = memory_store();

        store.checkout().await;
        assert_eq!(store.order().await.error, "Cart is empty");

        {
            let mut cart = store.inner.cart.write().await;
            cart.cart_items = vec![line("a", 1)];
        }
        store.checkout().await;
        assert_eq!(store.order().await.error, "No shipping address on the cart");

        store
            .save_shipping_address(ShippingAddress {
                address: "1 Main St".to_owned(),
                city: "Springfield".to_owned(),
                postal_code: "12345".to_owned(),
                country: "USA".to_owned(),
            })
            .await;
        store.checkout().await;
        assert_eq!(store.order().await.error, "No payment method selected");
    }
}
