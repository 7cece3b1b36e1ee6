/**
 * List Article Handlers
 *
 * Implements GET /articles and GET /articles/published.
 *
 * An empty result set is a 404, not an empty array. That policy is part
 * of the public contract and is preserved as documented behavior.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::articles::handlers::types::ArticleResponse;
use crate::articles::store::{list_articles, list_articles_by_status};
use crate::error::ApiError;

/// Status tag matched by the published-only listing.
const PUBLISHED_STATUS: &str = "published";

/// List all articles
///
/// # Errors
///
/// * `404 Not Found` - the table is empty
/// * `500 Internal Server Error` - query failure
pub async fn get_articles(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<ArticleResponse>>, ApiError> {
    let articles = list_articles(&pool).await?;

    if articles.is_empty() {
        return Err(ApiError::NotFound("No articles found".to_string()));
    }

    tracing::info!("Listing {} articles", articles.len());

    Ok(Json(articles.into_iter().map(ArticleResponse::from).collect()))
}

/// List articles with status "published"
///
/// # Errors
///
/// * `404 Not Found` - no published articles
/// * `500 Internal Server Error` - query failure
pub async fn get_published_articles(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<ArticleResponse>>, ApiError> {
    let articles = list_articles_by_status(&pool, PUBLISHED_STATUS).await?;

    if articles.is_empty() {
        return Err(ApiError::NotFound("No published articles found".to_string()));
    }

    tracing::info!("Listing {} published articles", articles.len());

    Ok(Json(articles.into_iter().map(ArticleResponse::from).collect()))
}
