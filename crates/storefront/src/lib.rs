//! Madrona Storefront - API client and state store.
//!
//! # Architecture
//!
//! - [`api`] - REST gateway: one round trip per operation, bearer-token
//!   authorization, server error messages surfaced verbatim
//! - [`storage`] - Persisted client cache: four durable slots (cart lines,
//!   shipping address, payment method, session) behind a backend trait
//! - [`state`] - Domain slices: pure state containers that fold
//!   pending/fulfilled/rejected phases into view state
//! - [`store`] - The [`Store`]: dispatches intents, runs the request
//!   lifecycle, mirrors cache slots, and issues follow-up fetches
//!
//! The view layer (CLI, UI, tests) is strictly a consumer: it dispatches
//! intents and reads slice snapshots. Errors never escape a dispatch; they
//! land in the owning slice's `error` field.
//!
//! # Example
//!
//! ```rust,ignore
//! use madrona_storefront::{ClientConfig, Store};
//!
//! let config = ClientConfig::from_env()?;
//! let store = Store::from_config(&config)?;
//!
//! store.list_products("headphones", 1).await;
//! let catalog = store.product_list().await;
//! if catalog.error.is_empty() {
//!     for product in &catalog.products {
//!         println!("{} - {}", product.name, product.price);
//!     }
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod state;
pub mod storage;
pub mod store;

pub use api::{ApiClient, ApiError};
pub use config::{ClientConfig, ConfigError};
pub use storage::{CacheBackend, CacheSlot, FileCache, MemoryCache, PersistedCache, StorageError};
pub use store::Store;
