//! Credential store: the only code that touches the users table.
//! Password hashes go in and out of here as opaque strings; callers decide
//! what is safe to expose.

use chrono::Utc;
use crate::db::models::User;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct UserStore {
    pool: DbPool,
}

impl UserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new user and returns the store-assigned id.
    /// Uniqueness is left to the UNIQUE(username) constraint; a violation
    /// maps to `DuplicateUsername` so concurrent registrations cannot race
    /// past an application-level pre-check.
    pub async fn insert(&self, username: &str, password_hash: &str) -> AppResult<i64> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users (username, password, created_at, updated_at)
             VALUES (?, ?, ?, ?)"
        )
        .bind(username)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::DuplicateUsername(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, created_at, updated_at
             FROM users WHERE username = ?"
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, created_at, updated_at
             FROM users WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Overwrites username and password hash for the given id.
    /// Returns false when no row matched.
    pub async fn update(&self, id: i64, username: &str, password_hash: &str) -> AppResult<bool> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE users SET username = ?, password = ?, updated_at = ? WHERE id = ?"
        )
        .bind(username)
        .bind(password_hash)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() > 0),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::DuplicateUsername(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Idempotent: deleting an id that never existed is not an error.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
