//! Integration test support for Madrona.
//!
//! These tests require a running storefront API with the standard seed
//! data (a catalog of 12 products and an admin account).
//!
//! # Environment Variables
//!
//! - `MADRONA_API_URL` - API root (default: `http://localhost:5000/api`)
//! - `MADRONA_TEST_EMAIL` - Credentials for authenticated flows
//!   (default: `admin@example.com`; the order tests need an admin)
//! - `MADRONA_TEST_PASSWORD` - Password for the test account
//!   (default: `123456`)
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p madrona-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use url::Url;

use madrona_storefront::{ApiClient, ClientConfig, MemoryCache, PersistedCache, Store};

/// API root for the test server (configurable via environment).
#[must_use]
pub fn api_url() -> Url {
    let raw = std::env::var("MADRONA_API_URL")
        .unwrap_or_else(|_| "http://localhost:5000/api".to_owned());
    Url::parse(&raw).expect("MADRONA_API_URL must be a valid URL")
}

/// Credentials for authenticated flows.
#[must_use]
pub fn credentials() -> (String, String) {
    let email =
        std::env::var("MADRONA_TEST_EMAIL").unwrap_or_else(|_| "admin@example.com".to_owned());
    let password = std::env::var("MADRONA_TEST_PASSWORD").unwrap_or_else(|_| "123456".to_owned());
    (email, password)
}

/// A fresh store over an in-memory cache, so tests never share persisted
/// state with each other or with a developer's CLI session.
#[must_use]
pub fn fresh_store() -> Store {
    let config = ClientConfig {
        api_url: api_url(),
        data_dir: PathBuf::from("unused"),
    };
    let cache = PersistedCache::new(Arc::new(MemoryCache::new()));
    Store::new(ApiClient::new(&config), cache)
}

/// A store with an authenticated session.
///
/// # Panics
///
/// Panics when the test credentials are rejected.
pub async fn signed_in_store() -> Store {
    let store = fresh_store();
    let (email, password) = credentials();
    let email = madrona_core::Email::parse(&email).expect("valid test email");
    store.login(&email, &password).await;

    let user = store.user().await;
    assert!(
        user.error.is_empty(),
        "test login failed: {} (is the server running and seeded?)",
        user.error
    );
    store
}
