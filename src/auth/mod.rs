//! Authentication Module
//!
//! User store, JWT token issuance/verification, and the auth HTTP
//! handlers.

pub mod handlers;
pub mod tokens;
pub mod users;

pub use handlers::{login, register, reset_password};
