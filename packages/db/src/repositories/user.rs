//! User repository for centralized database operations

use sqlx::PgPool;

use super::utils::USER_COLUMNS;
use crate::error::{DbError, DbResult};
use crate::models::User;

/// Repository for user database operations
///
/// Email lookups are case-insensitive: addresses are lower-cased before
/// binding on both insert and lookup, so uniqueness holds regardless of the
/// casing a client submits.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by their unique ID
    pub async fn find_by_id(&self, user_id: i64) -> DbResult<User> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        sqlx::query_as::<_, User>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?
            .ok_or_else(|| DbError::not_found("user", user_id))
    }

    /// Find a user by their email address (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> DbResult<User> {
        let sql = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);
        sqlx::query_as::<_, User>(&sql)
            .bind(email.to_lowercase())
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?
            .ok_or_else(|| DbError::not_found("user", email))
    }

    /// Create a new user
    ///
    /// `password` is an opaque, pre-hashed credential; this layer never
    /// hashes or inspects it. A duplicate email surfaces as
    /// ConstraintViolation.
    pub async fn create(&self, name: &str, email: &str, password: &str) -> DbResult<User> {
        let sql = format!(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(name)
            .bind(email.to_lowercase())
            .bind(password)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }
}
