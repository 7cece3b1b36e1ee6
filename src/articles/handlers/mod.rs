//! Article Handlers
//!
//! HTTP handlers for the article CRUD endpoints, plus the shared
//! multipart form and response projection types.

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod types;

pub use add::add_article;
pub use delete::remove_article;
pub use edit::edit_article;
pub use list::{get_articles, get_published_articles};
