/**
 * Registration Handler
 *
 * Implements POST /register.
 *
 * # Registration Process
 *
 * 1. Validate that name, email, and password are present
 * 2. Hash the password using bcrypt
 * 3. Insert the user with role defaulted to "user" when omitted
 * 4. Return a plain confirmation
 *
 * No token is issued at registration time; the client must log in
 * separately.
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{present, RegisterRequest};
use crate::auth::users::create_user;
use crate::error::ApiError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - name, email, or password missing or blank
/// * `500 Internal Server Error` - password hashing or insert failure
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<&'static str, ApiError> {
    let (name, email, password) = match (
        present(&request.name),
        present(&request.email),
        present(&request.password),
    ) {
        (Some(name), Some(email), Some(password)) => (name, email, password),
        _ => {
            return Err(ApiError::Validation(
                "Name, email, and password are required".to_string(),
            ))
        }
    };

    tracing::info!("Registration request for email: {}", email);

    let password_hash = hash(password, DEFAULT_COST)?;

    create_user(
        &pool,
        name.to_string(),
        email.to_string(),
        password_hash,
        request.role.clone(),
    )
    .await?;

    tracing::info!("User registered: {}", email);

    Ok("User registered")
}
