/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: database connection, migrations, state creation, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL using the configured `DATABASE_URL`
 * 2. Run embedded migrations from `./migrations`
 * 3. Derive JWT keys from the configured secret
 * 4. Create the router with all routes and shared state
 *
 * Unlike optional services, the database is a hard dependency here: a
 * failed connection or failed migration aborts startup.
 */

use axum::Router;
use sqlx::PgPool;

use crate::auth::tokens::TokenKeys;
use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// Connects to the database, runs migrations, and returns a router ready
/// to serve requests.
///
/// # Errors
///
/// Returns `sqlx::Error` if the database connection or a migration fails.
pub async fn create_app(config: &AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(sqlx::Error::from)?;
    tracing::info!("Database migrations completed");

    let app_state = AppState {
        pool,
        tokens: TokenKeys::from_secret(&config.jwt_secret),
    };

    Ok(create_router(app_state))
}
