/**
 * Add Article Handler
 *
 * Implements POST /add-article. The request is a multipart form with
 * `title`, `content`, an optional `status` tag, and an optional binary
 * `image` field. The row gets a server-assigned ID and creation
 * timestamp.
 */

use axum::extract::{Multipart, State};
use sqlx::PgPool;

use crate::articles::handlers::types::ArticleForm;
use crate::articles::store::insert_article;
use crate::error::ApiError;

/// Add article handler
///
/// # Errors
///
/// * `400 Bad Request` - title or content missing or blank
/// * `500 Internal Server Error` - insert failure
pub async fn add_article(
    State(pool): State<PgPool>,
    multipart: Multipart,
) -> Result<&'static str, ApiError> {
    let form = ArticleForm::from_multipart(multipart).await?.into_validated()?;

    tracing::info!("Adding article: {}", form.title);

    let article = insert_article(
        &pool,
        &form.title,
        &form.content,
        form.status.as_deref(),
        form.image.as_deref(),
    )
    .await?;

    tracing::info!("Article added: {}", article.id);

    Ok("Article added successfully")
}
