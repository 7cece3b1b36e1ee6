//! Articles Module
//!
//! Article store and the CRUD HTTP handlers.

pub mod handlers;
pub mod store;

pub use handlers::{add_article, edit_article, get_articles, get_published_articles, remove_article};
