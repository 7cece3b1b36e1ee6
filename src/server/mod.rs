//! Server setup module
//!
//! Contains configuration loading, application state, and server
//! initialization.

pub mod config;
pub mod init;
pub mod state;
