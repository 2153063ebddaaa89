//! Session and user-management commands.

use madrona_core::{ProfileUpdate, UserId, UserUpdate};
use madrona_storefront::Store;

use super::{CommandError, fail_on_error, parse_email};

/// Log in and persist the session.
pub async fn login(store: &Store, email: &str, password: &str) -> Result<(), CommandError> {
    let email = parse_email(email)?;
    store.login(&email, password).await;
    let state = store.user().await;
    fail_on_error(&state.error)?;

    if let Some(info) = state.user_info {
        println!("Logged in as {} <{}>", info.name, info.email);
    }
    Ok(())
}

/// Register a new account.
pub async fn register(
    store: &Store,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), CommandError> {
    let email = parse_email(email)?;
    store.register(name, &email, password).await;
    let state = store.user().await;
    fail_on_error(&state.error)?;

    if let Some(info) = state.user_info {
        println!("Registered {} <{}>", info.name, info.email);
    }
    Ok(())
}

/// Show the caller's own profile.
pub async fn profile(store: &Store) -> Result<(), CommandError> {
    store.get_profile().await;
    let state = store.user().await;
    fail_on_error(&state.error)?;

    if let Some(user) = state.user_details {
        print_user(&user);
    }
    Ok(())
}

/// Update the caller's own profile.
pub async fn update_profile(
    store: &Store,
    name: String,
    email: &str,
    password: Option<String>,
) -> Result<(), CommandError> {
    let email = parse_email(email)?;
    store
        .update_profile(&ProfileUpdate {
            name,
            email,
            password,
        })
        .await;
    let state = store.user().await;
    fail_on_error(&state.error)?;

    println!("Profile updated");
    Ok(())
}

/// List all users (admin).
pub async fn list(store: &Store) -> Result<(), CommandError> {
    store.list_users().await;
    let state = store.user().await;
    fail_on_error(&state.error)?;

    for user in &state.users {
        print_user(user);
    }
    Ok(())
}

/// Show one user (admin).
pub async fn show(store: &Store, id: &str) -> Result<(), CommandError> {
    store.get_user_details(&UserId::new(id)).await;
    let state = store.user().await;
    fail_on_error(&state.error)?;

    if let Some(user) = state.user_details {
        print_user(&user);
    }
    Ok(())
}

/// Update a user (admin).
pub async fn update(
    store: &Store,
    id: &str,
    name: String,
    email: &str,
    admin: bool,
) -> Result<(), CommandError> {
    let email = parse_email(email)?;
    store
        .update_user(
            &UserId::new(id),
            &UserUpdate {
                name,
                email,
                is_admin: admin,
            },
        )
        .await;
    let state = store.user().await;
    fail_on_error(&state.error)?;

    println!("User updated");
    Ok(())
}

/// Delete a user (admin).
pub async fn delete(store: &Store, id: &str) -> Result<(), CommandError> {
    store.delete_user(&UserId::new(id)).await;
    let state = store.user().await;
    fail_on_error(&state.error)?;

    println!("Deleted {id}; {} users remain", state.users.len());
    Ok(())
}

/// Log out and clear the persisted session.
pub async fn logout(store: &Store) -> Result<(), CommandError> {
    store.logout().await;
    println!("Logged out");
    Ok(())
}

fn print_user(user: &madrona_core::User) {
    let role = if user.is_admin { "admin" } else { "customer" };
    println!("{}  {:<25}  {}  [{role}]", user.id, user.name, user.email);
}
