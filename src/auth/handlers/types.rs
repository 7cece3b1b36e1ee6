/**
 * Authentication Handler Types
 *
 * Request and response types used by the registration, login, and
 * password-reset handlers.
 *
 * Request fields are `Option<String>` so that a missing or blank field
 * becomes a 400 `ValidationError` with the documented message, rather
 * than a deserialization rejection.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    /// Display name
    pub name: Option<String>,
    /// Email address (login key)
    pub email: Option<String>,
    /// Password (hashed before storage)
    pub password: Option<String>,
    /// Role tag; defaults to "user" when omitted
    pub role: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    /// Email address
    pub email: Option<String>,
    /// Password (verified against the stored hash)
    pub password: Option<String>,
}

/// Password reset request
///
/// The wire field is `newPassword`, matching the public contract.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ResetPasswordRequest {
    /// Email address of the account to reset
    pub email: Option<String>,
    /// Replacement password
    #[serde(rename = "newPassword")]
    pub new_password: Option<String>,
}

/// Login response
///
/// Contains the JWT token (1-hour expiry) and a public projection of the
/// user.
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// Confirmation message
    pub message: String,
    /// Signed bearer token
    pub token: String,
    /// Public user projection
    pub user: UserResponse,
}

/// Public user projection
///
/// Contains only fields that are safe to return to clients. The password
/// hash is deliberately absent.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Role tag
    pub role: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

/// Returns the trimmed value when the field is present and non-blank.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_present_rejects_blank_and_missing() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some("".to_string())), None);
        assert_eq!(present(&Some("   ".to_string())), None);
        assert_eq!(present(&Some("value".to_string())), Some("value"));
    }

    #[test]
    fn test_reset_request_uses_wire_field_name() {
        let parsed: ResetPasswordRequest =
            serde_json::from_str(r#"{"email":"a@b.c","newPassword":"secret123"}"#).unwrap();
        assert_eq!(parsed.new_password.as_deref(), Some("secret123"));
    }

    #[test]
    fn test_user_projection_has_no_password_field() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "$2b$10$hash".to_string(),
            role: "user".to_string(),
            created_at: Utc::now(),
        };

        let projection = UserResponse::from(&user);
        let json = serde_json::to_value(&projection).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "test@example.com");
    }
}
