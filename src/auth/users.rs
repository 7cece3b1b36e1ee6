/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. All queries use
 * bound parameters. Users are created by registration and mutated only by
 * password reset; no exposed operation deletes a user.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Role assigned when registration omits one.
pub const DEFAULT_ROLE: &str = "user";

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address, used as the login key
    pub email: String,
    /// Hashed password (bcrypt); never exposed to clients
    pub password_hash: String,
    /// Role tag, defaults to "user"
    pub role: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Display name
/// * `email` - Email address
/// * `password_hash` - Hashed password
/// * `role` - Role tag; `None` defaults to "user"
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &PgPool,
    name: String,
    email: String,
    password_hash: String,
    role: Option<String>,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, role, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, email, password_hash, role, created_at
        "#,
    )
    .bind(id)
    .bind(&name)
    .bind(&email)
    .bind(&password_hash)
    .bind(role.as_deref().unwrap_or(DEFAULT_ROLE))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Replace the stored password hash for the user matched by email
///
/// # Returns
/// Number of rows affected (0 when no user matched)
pub async fn update_password_hash(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET password_hash = $1
        WHERE email = $2
        "#,
    )
    .bind(password_hash)
    .bind(email)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
