/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration
 * from environment variables. Configuration is collected once at startup
 * into an explicit `AppConfig` value that is passed down to the rest of
 * the application; handlers never read process-wide state directly.
 *
 * # Required Variables
 *
 * - `DATABASE_URL` - PostgreSQL connection string
 * - `JWT_SECRET` - HMAC secret used to sign and verify bearer tokens
 *
 * # Optional Variables
 *
 * - `SERVER_PORT` - Listen port, defaults to 3001
 */

use thiserror::Error;

/// Default listen port when `SERVER_PORT` is not set.
const DEFAULT_PORT: u16 = 3001;

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// `SERVER_PORT` is set but is not a valid port number
    #[error("invalid SERVER_PORT value: {0}")]
    InvalidPort(String),
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Secret used to sign and verify JWT bearer tokens
    pub jwt_secret: String,
    /// TCP port the server listens on
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DATABASE_URL` or `JWT_SECRET` is missing,
    /// or if `SERVER_PORT` is set but unparseable. There is deliberately no
    /// fallback secret: a misconfigured server must not start.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}
