//! Middleware Module
//!
//! Token verification middleware for protected routes.

pub mod auth;

pub use auth::{verify_token, AuthenticatedUser};
