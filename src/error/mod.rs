//! Error Module
//!
//! Defines the four-kind error taxonomy used by all handlers and its
//! conversion into HTTP responses.
//!
//! - **`types`** - Error type definitions and status mapping
//! - **`conversion`** - `IntoResponse` implementation

pub mod conversion;
pub mod types;

pub use types::{ApiError, INVALID_CREDENTIALS_MESSAGE};
