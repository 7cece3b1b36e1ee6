/**
 * Edit Article Handler
 *
 * Implements PUT /edit-article/{id}. Performs a full-row replace of
 * title, content, status, and image keyed by the path ID; supplying no
 * new image clears the stored one. The ID and creation timestamp are
 * preserved.
 */

use axum::{
    extract::{Multipart, State},
    response::Json,
};
use sqlx::PgPool;

use crate::articles::handlers::types::{ArticleForm, ArticleId};
use crate::articles::store::update_article;
use crate::error::ApiError;

/// Edit article handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed ID, or title/content missing or blank
/// * `404 Not Found` - no article matched the ID
/// * `500 Internal Server Error` - update failure
pub async fn edit_article(
    State(pool): State<PgPool>,
    ArticleId(id): ArticleId,
    multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let form = ArticleForm::from_multipart(multipart).await?.into_validated()?;

    tracing::info!("Editing article: {}", id);

    let affected = update_article(
        &pool,
        id,
        &form.title,
        &form.content,
        form.status.as_deref(),
        form.image.as_deref(),
    )
    .await?;

    if affected == 0 {
        return Err(ApiError::NotFound("Article not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "message": "Article updated successfully"
    })))
}
