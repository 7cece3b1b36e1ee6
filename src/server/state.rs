/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * The `AppState` struct is the central state container for the
 * application, holding:
 * - The PostgreSQL connection pool, created once at startup
 * - The JWT signing/verification keys, derived from the configured secret
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. This follows
 * Axum's recommended pattern for state management.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::tokens::TokenKeys;

/// Application state shared by all handlers
///
/// Both fields are cheap to clone: `PgPool` is internally reference
/// counted and `TokenKeys` wraps its key material in an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    ///
    /// Opened once at startup and reused by all handlers. There is no
    /// reconnect policy; a dropped connection surfaces as 500 responses
    /// until the process is restarted.
    pub pool: PgPool,

    /// JWT encoding/decoding keys derived from the configured secret
    pub tokens: TokenKeys,
}

/// Allow handlers to take `State(pool): State<PgPool>` directly.
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allow handlers to take `State(keys): State<TokenKeys>` directly.
impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
