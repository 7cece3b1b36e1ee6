//! Hexafour - Article Backend
//!
//! Hexafour is a small HTTP backend providing user registration and login
//! (bcrypt-hashed credentials, JWT bearer tokens) and CRUD over an article
//! resource with an optional binary image attachment.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, and server setup
//! - **`routes`** - HTTP route configuration
//! - **`auth`** - User store, JWT tokens, and auth handlers
//! - **`articles`** - Article store and CRUD handlers
//! - **`middleware`** - Token verification middleware
//! - **`error`** - Error taxonomy and HTTP response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use hexafour::server::config::AppConfig;
//! use hexafour::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

pub mod articles;
pub mod auth;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
