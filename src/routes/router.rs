/**
 * Router Configuration
 *
 * This module provides the main router creation function that wires all
 * endpoints into a single Axum router.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /register` - User registration
 * - `POST /login` - User login (returns a JWT)
 * - `POST /reset-password` - Overwrite the password hash by email
 * - `GET /protected` - Token-gated probe route
 *
 * ## Articles
 * - `POST /add-article` - Create an article (multipart, optional image)
 * - `GET /articles` - List all articles
 * - `GET /articles/published` - List articles with status "published"
 * - `PUT /edit-article/{id}` - Full-row replace
 * - `DELETE /delete-article/{id}` - Delete by ID
 *
 * Only `/protected` sits behind the token middleware; the article
 * mutation routes are public, matching the published contract.
 */

use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower_http::cors::CorsLayer;

use crate::articles::{
    add_article, edit_article, get_articles, get_published_articles, remove_article,
};
use crate::auth::{login, register, reset_password};
use crate::middleware::auth::verify_token;
use crate::server::state::AppState;

/// Maximum request body size for article uploads (10 MiB).
const UPLOAD_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Probe handler for the token gate.
async fn protected() -> &'static str {
    "This is a protected route"
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database pool and token keys)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    // Routes that require a bearer token
    let protected_routes = Router::new()
        .route("/protected", axum::routing::get(protected))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            verify_token,
        ));

    // Article upload routes carry binary images, so raise the body limit
    let upload_routes = Router::new()
        .route("/add-article", axum::routing::post(add_article))
        .route("/edit-article/{id}", axum::routing::put(edit_article))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT));

    let router = Router::new()
        .route("/register", axum::routing::post(register))
        .route("/login", axum::routing::post(login))
        .route("/reset-password", axum::routing::post(reset_password))
        .route("/articles", axum::routing::get(get_articles))
        .route("/articles/published", axum::routing::get(get_published_articles))
        .route("/delete-article/{id}", axum::routing::delete(remove_article))
        .merge(protected_routes)
        .merge(upload_routes);

    // Fallback handler for 404
    let router =
        router.fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") });

    router.layer(CorsLayer::permissive()).with_state(app_state)
}
