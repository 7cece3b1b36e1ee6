/**
 * API Error Types
 *
 * This module defines the error taxonomy used by all HTTP handlers.
 * Every failure is converted at the point of occurrence into one of
 * four kinds, each with a fixed HTTP status:
 *
 * - Validation (400) - missing or malformed required input
 * - Auth (400/401)   - bad credentials (400) or token failures (401)
 * - Not found (404)  - no matching row
 * - Internal (500)   - store, hashing, or token-signing failure
 *
 * Invalid and missing tokens both map to 401. Bad login credentials map
 * to 400 with a single generic message so that an unknown email and a
 * wrong password are indistinguishable to the caller.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Generic message returned for any failed login attempt.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Email or password is incorrect";

/// Error type returned by all handlers
///
/// Each variant carries enough context to produce an HTTP response.
/// Internal variants (`Database`, `Hash`, `Token`) never surface their
/// details to the client; those go to the log only.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required input
    #[error("{0}")]
    Validation(String),

    /// Unknown email or wrong password at login
    ///
    /// Both cases share this variant and its fixed message.
    #[error("Email or password is incorrect")]
    InvalidCredentials,

    /// No Authorization header on a protected route
    #[error("Access denied: missing authorization token")]
    MissingToken,

    /// Authorization header present but the token failed verification
    /// (bad signature, malformed, or expired)
    #[error("Invalid token")]
    InvalidToken,

    /// No row matched the request
    #[error("{0}")]
    NotFound(String),

    /// Database query failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    ///
    /// Verification failures are mapped to `InvalidToken` instead; this
    /// variant covers signing errors at login, which are server faults.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed to the client
    ///
    /// Internal errors return a fixed string; their causes are logged
    /// when the response is built.
    pub fn client_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}
