/**
 * Article Model and Database Operations
 *
 * This module handles article rows and their database operations. An
 * article's ID and creation timestamp are assigned at insert time and
 * survive edits; an edit is a full replace of title, content, status,
 * and image.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Article row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Article {
    /// Unique article ID (UUID), stable across edits
    pub id: Uuid,
    /// Title (non-empty)
    pub title: String,
    /// Body text (non-empty)
    pub content: String,
    /// Free-text status tag (e.g. "draft", "published"); nullable
    pub status: Option<String>,
    /// Creation timestamp, assigned server-side, never updated
    pub created_at: DateTime<Utc>,
    /// Optional raw image bytes
    pub image: Option<Vec<u8>>,
}

/// Insert a new article with a server-assigned ID and creation timestamp
pub async fn insert_article(
    pool: &PgPool,
    title: &str,
    content: &str,
    status: Option<&str>,
    image: Option<&[u8]>,
) -> Result<Article, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let article = sqlx::query_as::<_, Article>(
        r#"
        INSERT INTO articles (id, title, content, status, created_at, image)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, content, status, created_at, image
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(content)
    .bind(status)
    .bind(now)
    .bind(image)
    .fetch_one(pool)
    .await?;

    Ok(article)
}

/// Load all articles
pub async fn list_articles(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        r#"
        SELECT id, title, content, status, created_at, image
        FROM articles
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Load articles whose status equals the given tag
pub async fn list_articles_by_status(
    pool: &PgPool,
    status: &str,
) -> Result<Vec<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        r#"
        SELECT id, title, content, status, created_at, image
        FROM articles
        WHERE status = $1
        "#,
    )
    .bind(status)
    .fetch_all(pool)
    .await
}

/// Full-row update keyed by ID
///
/// Replaces title, content, status, and image; `None` for image clears
/// the stored blob (replace, not merge). The ID and creation timestamp
/// are untouched.
///
/// # Returns
/// Number of rows affected (0 when no article matched)
pub async fn update_article(
    pool: &PgPool,
    id: Uuid,
    title: &str,
    content: &str,
    status: Option<&str>,
    image: Option<&[u8]>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE articles
        SET title = $1, content = $2, status = $3, image = $4
        WHERE id = $5
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(status)
    .bind(image)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete an article by ID
///
/// # Returns
/// Number of rows affected (0 when no article matched)
pub async fn delete_article(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM articles
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
