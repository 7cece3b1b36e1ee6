//! Database test fixtures and utilities
//!
//! Provides utilities for setting up a test database, running migrations,
//! and cleaning up test data. Used by the database-backed integration
//! tests, which need a running PostgreSQL instance reachable via
//! `DATABASE_URL` or the default test URL.

use sqlx::PgPool;

/// Create a test database connection pool
///
/// Uses the `DATABASE_URL` environment variable or the default test
/// database URL.
pub async fn create_test_pool() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| super::TEST_DATABASE_URL.to_string());

    PgPool::connect(&database_url)
        .await
        .expect("Failed to create test database pool")
}

/// Run database migrations for testing
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Clean up test data from the database
///
/// Removes all rows while preserving the schema.
pub async fn cleanup_test_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("TRUNCATE TABLE users, articles CASCADE")
        .execute(pool)
        .await?;
    Ok(())
}

/// Test database fixture
///
/// Manages a test database connection with the schema migrated. Tests
/// call `cleanup` to start from an empty database.
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Create a new test database fixture
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Clean up test data
    pub async fn cleanup(&self) -> Result<(), sqlx::Error> {
        cleanup_test_data(&self.pool).await
    }
}
