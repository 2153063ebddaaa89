//! Integration tests for authentication.
//!
//! Run with: cargo test -p madrona-integration-tests -- --ignored

use madrona_core::Email;
use madrona_integration_tests::{credentials, fresh_store};

#[tokio::test]
#[ignore = "Requires a running storefront API with the seeded admin account"]
async fn test_login_succeeds_with_seeded_credentials() {
    let store = fresh_store();
    let (email, password) = credentials();
    let email = Email::parse(&email).expect("valid test email");

    store.login(&email, &password).await;
    let state = store.user().await;

    assert!(state.error.is_empty(), "login failed: {}", state.error);
    assert!(!state.loading);
    let info = state.user_info.expect("session present after login");
    assert!(!info.token.is_empty());
}

#[tokio::test]
#[ignore = "Requires a running storefront API"]
async fn test_rejected_login_reports_server_message_and_keeps_session_empty() {
    let store = fresh_store();
    let (email, _) = credentials();
    let email = Email::parse(&email).expect("valid test email");

    store.login(&email, "definitely-wrong-password").await;
    let state = store.user().await;

    assert!(!state.loading);
    assert!(state.user_info.is_none());
    assert!(
        !state.error.is_empty(),
        "expected the server's rejection message"
    );
}

#[tokio::test]
#[ignore = "Requires a running storefront API"]
async fn test_register_then_profile_round_trip() {
    let store = fresh_store();

    // Unique address per run so registration never collides.
    let unique = chrono::Utc::now().timestamp_millis();
    let email = Email::parse(&format!("it-{unique}@example.com")).expect("valid email");

    store.register("Integration Test", &email, "pw-123456").await;
    let state = store.user().await;
    assert!(state.error.is_empty(), "register failed: {}", state.error);

    store.get_profile().await;
    let state = store.user().await;
    assert!(state.error.is_empty(), "profile failed: {}", state.error);
    let details = state.user_details.expect("profile loaded");
    assert_eq!(details.email, email);
}
