//! Authentication Handlers
//!
//! HTTP handlers for registration, login, and password reset, plus their
//! request/response types.

pub mod login;
pub mod register;
pub mod reset_password;
pub mod types;

pub use login::login;
pub use register::register;
pub use reset_password::reset_password;
