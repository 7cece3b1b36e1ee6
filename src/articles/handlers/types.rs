/**
 * Article Handler Types
 *
 * The multipart form shared by the add and edit handlers, and the
 * projection returned by the list handlers.
 *
 * Articles are written as multipart forms (text fields plus at most one
 * binary image field, buffered in memory) and read back as JSON with the
 * image re-encoded as base64.
 */

use axum::extract::{FromRequestParts, Multipart, Path};
use axum::http::request::Parts;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::articles::store::Article;
use crate::error::ApiError;

/// Article ID path extractor
///
/// Wraps the `{id}` path segment so that a malformed ID is rejected as an
/// `ApiError` with the usual JSON `{error, status}` body, rather than
/// axum's plain-text `Path` rejection.
#[derive(Debug)]
pub struct ArticleId(pub Uuid);

impl<S> FromRequestParts<S> for ArticleId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation("Article id is required".to_string()))?;

        let id = Uuid::parse_str(&raw)
            .map_err(|_| ApiError::Validation(format!("Invalid article id: {raw}")))?;

        Ok(Self(id))
    }
}

/// Fields extracted from an article multipart form
#[derive(Debug, Default)]
pub struct ArticleForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub image: Option<Vec<u8>>,
}

impl ArticleForm {
    /// Drain a multipart request into an `ArticleForm`
    ///
    /// Recognized fields are `title`, `content`, `status`, and `image`
    /// (binary). Unknown fields are ignored. A malformed multipart body
    /// is a validation error.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::Validation(format!("Malformed multipart body: {e}")))?
        {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("title") => form.title = Some(read_text(field).await?),
                Some("content") => form.content = Some(read_text(field).await?),
                Some("status") => form.status = Some(read_text(field).await?),
                Some("image") => {
                    let bytes = field.bytes().await.map_err(|e| {
                        ApiError::Validation(format!("Failed to read image field: {e}"))
                    })?;
                    form.image = Some(bytes.to_vec());
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Validate the required fields
    ///
    /// Title and content must be present and non-blank; status and image
    /// stay optional.
    pub fn into_validated(self) -> Result<ValidatedArticleForm, ApiError> {
        let blank = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or("").is_empty();

        if blank(&self.title) || blank(&self.content) {
            return Err(ApiError::Validation(
                "Title and content are required.".to_string(),
            ));
        }

        Ok(ValidatedArticleForm {
            title: self.title.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            status: self.status,
            image: self.image,
        })
    }
}

/// An article form whose required fields have been checked
#[derive(Debug)]
pub struct ValidatedArticleForm {
    pub title: String,
    pub content: String,
    pub status: Option<String>,
    pub image: Option<Vec<u8>>,
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::Validation(format!("Malformed multipart field: {e}")))
}

/// Article projection returned by the list endpoints
///
/// The creation timestamp keeps its wire name `tanggal_buat` and the
/// image is re-encoded as base64 when present.
#[derive(Serialize, Deserialize, Debug)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub status: Option<String>,
    pub tanggal_buat: DateTime<Utc>,
    pub image: Option<String>,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.to_string(),
            title: article.title,
            content: article.content,
            status: article.status,
            tanggal_buat: article.created_at,
            image: article.image.map(|bytes| BASE64.encode(bytes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_article(image: Option<Vec<u8>>) -> Article {
        Article {
            id: Uuid::new_v4(),
            title: "T".to_string(),
            content: "C".to_string(),
            status: Some("draft".to_string()),
            created_at: Utc::now(),
            image,
        }
    }

    #[test]
    fn test_validation_requires_title_and_content() {
        let form = ArticleForm {
            title: None,
            content: Some("body".to_string()),
            ..Default::default()
        };
        assert!(form.into_validated().is_err());

        let form = ArticleForm {
            title: Some("title".to_string()),
            content: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(form.into_validated().is_err());
    }

    #[test]
    fn test_validation_allows_missing_status_and_image() {
        let form = ArticleForm {
            title: Some("T".to_string()),
            content: Some("C".to_string()),
            ..Default::default()
        };
        let validated = form.into_validated().unwrap();
        assert_eq!(validated.title, "T");
        assert!(validated.status.is_none());
        assert!(validated.image.is_none());
    }

    #[test]
    fn test_projection_encodes_image_as_base64() {
        let response = ArticleResponse::from(sample_article(Some(vec![0xDE, 0xAD, 0xBE, 0xEF])));
        assert_eq!(response.image.as_deref(), Some("3q2+7w=="));
    }

    #[test]
    fn test_projection_null_image_stays_null() {
        let response = ArticleResponse::from(sample_article(None));
        assert!(response.image.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["image"].is_null());
        assert!(json.get("tanggal_buat").is_some());
    }
}
