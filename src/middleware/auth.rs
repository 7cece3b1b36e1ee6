/**
 * Authentication Middleware
 *
 * Middleware for routes that require a bearer token. The token is read
 * from the Authorization header **verbatim** - the public contract sends
 * the raw token with no "Bearer " prefix, so none is stripped.
 *
 * A missing header yields 401; a present-but-invalid or expired token
 * also yields 401. On success the decoded claims are attached to request
 * extensions for downstream handlers. The user store is NOT re-consulted:
 * a valid token is trusted for its whole validity window even if the
 * account has changed since issuance.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::TokenKeys;
use crate::error::ApiError;

/// Authenticated user data extracted from JWT token claims
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Token verification middleware
///
/// 1. Reads the Authorization header (raw token, no prefix)
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to request extensions
///
/// # Errors
///
/// * `401 Unauthorized` - header missing, or token invalid/expired
pub async fn verify_token(
    State(keys): State<TokenKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request.headers().get(AUTHORIZATION).ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        ApiError::MissingToken
    })?;

    // A header that is present but not readable as UTF-8 is an invalid
    // token, not a missing one.
    let token = header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        ApiError::InvalidToken
    })?;

    let claims = keys.verify_token(token).map_err(|e| {
        tracing::warn!("Token verification failed: {:?}", e);
        ApiError::InvalidToken
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Malformed user ID in token claims: {:?}", e);
        ApiError::InvalidToken
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}
