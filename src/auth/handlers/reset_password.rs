/**
 * Password Reset Handler
 *
 * Implements POST /reset-password.
 *
 * Derives a new bcrypt hash and overwrites the stored hash for the user
 * matched by email. This operation performs no identity proof beyond
 * knowing the email address; the gap is documented rather than silently
 * fixed.
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{present, ResetPasswordRequest};
use crate::auth::users::update_password_hash;
use crate::error::ApiError;

/// Reset password handler
///
/// # Errors
///
/// * `400 Bad Request` - email or new password missing or blank
/// * `404 Not Found` - no user matched the email
/// * `500 Internal Server Error` - hashing or update failure
pub async fn reset_password(
    State(pool): State<PgPool>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (email, new_password) = match (present(&request.email), present(&request.new_password)) {
        (Some(email), Some(new_password)) => (email, new_password),
        _ => {
            return Err(ApiError::Validation(
                "Email and new password are required.".to_string(),
            ))
        }
    };

    tracing::info!("Password reset request for: {}", email);

    let password_hash = hash(new_password, DEFAULT_COST)?;

    let affected = update_password_hash(&pool, email, &password_hash).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("User not found.".to_string()));
    }

    tracing::info!("Password reset for: {}", email);

    Ok(Json(serde_json::json!({
        "message": "Password reset successful."
    })))
}
