//! Session and user entities.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::UserId;

/// The authenticated session profile.
///
/// Returned by login, registration, and profile updates. Holds the bearer
/// token plus profile fields; the password credential never reaches the
/// client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Document identifier.
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Whether the user may perform admin operations.
    #[serde(default)]
    pub is_admin: bool,
    /// Bearer token for authorized requests.
    pub token: String,
}

/// A user record as seen by admin management screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Document identifier.
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Whether the user may perform admin operations.
    #[serde(default)]
    pub is_admin: bool,
}

/// Self-service profile edit payload.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    /// New display name.
    pub name: String,
    /// New email address.
    pub email: Email,
    /// New password; omitted to keep the current one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Admin edit payload for another user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// New display name.
    pub name: String,
    /// New email address.
    pub email: Email,
    /// New admin flag.
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_wire_format() {
        let json = r#"{
            "_id": "u1",
            "name": "Jo Smith",
            "email": "jo@example.com",
            "isAdmin": false,
            "token": "eyJhbGciOiJIUzI1NiJ9.payload.sig"
        }"#;

        let info: UserInfo = serde_json::from_str(json).expect("deserialize user info");
        assert_eq!(info.id.as_str(), "u1");
        assert!(!info.is_admin);
        assert!(info.token.starts_with("eyJ"));

        // Round-trips so the persisted session slot stays wire-compatible.
        let value = serde_json::to_value(&info).expect("serialize user info");
        assert_eq!(value["_id"], "u1");
        assert_eq!(value["isAdmin"], false);
    }

    #[test]
    fn test_profile_update_omits_empty_password() {
        let update = ProfileUpdate {
            name: "Jo Smith".to_owned(),
            email: Email::parse("jo@example.com").expect("valid email"),
            password: None,
        };

        let value = serde_json::to_value(&update).expect("serialize update");
        assert!(value.get("password").is_none());
    }
}
