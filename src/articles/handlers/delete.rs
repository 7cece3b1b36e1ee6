/**
 * Delete Article Handler
 *
 * Implements DELETE /delete-article/{id}.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::articles::handlers::types::ArticleId;
use crate::articles::store::delete_article;
use crate::error::ApiError;

/// Delete article handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed ID
/// * `404 Not Found` - no article matched the ID
/// * `500 Internal Server Error` - delete failure
pub async fn remove_article(
    State(pool): State<PgPool>,
    ArticleId(id): ArticleId,
) -> Result<Json<serde_json::Value>, ApiError> {
    tracing::info!("Deleting article: {}", id);

    let affected = delete_article(&pool, id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Article not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "message": "Article deleted successfully"
    })))
}
