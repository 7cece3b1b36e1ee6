/**
 * Login Handler
 *
 * Implements POST /login.
 *
 * # Authentication Process
 *
 * 1. Validate that email and password are present
 * 2. Look up the user by email
 * 3. Verify the password using bcrypt
 * 4. Sign a JWT (1-hour expiry) and return it with a public user
 *    projection
 *
 * # Security
 *
 * An unknown email and a wrong password both fail with the same status
 * and the same generic message, so the caller cannot tell which field
 * was wrong. Password hashes are never returned in responses.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{present, LoginRequest, LoginResponse, UserResponse};
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, unknown email, or wrong password
/// * `500 Internal Server Error` - database, bcrypt, or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (email, password) = match (present(&request.email), present(&request.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            return Err(ApiError::Validation(
                "Email and password are required".to_string(),
            ))
        }
    };

    tracing::info!("Login request for: {}", email);

    let user = get_user_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed: unknown email");
            ApiError::InvalidCredentials
        })?;

    let valid = bcrypt::verify(password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login failed: wrong password for {}", email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.create_token(user.id, user.email.clone())?;

    tracing::info!("User logged in: {}", user.email);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: UserResponse::from(&user),
    }))
}
