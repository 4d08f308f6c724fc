//! Account management: validated CRUD over the credential store.
//! Validation runs before any store access; hashing happens here so plain
//! passwords never reach the store.

use crate::api::validators::validate_credentials;
use crate::auth::password;
use crate::db::models::User;
use crate::db::users::UserStore;
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct AccountManager {
    store: UserStore,
}

impl AccountManager {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Registers a new account. Duplicate usernames are detected by the
    /// store's uniqueness constraint, not a pre-check.
    pub async fn create(&self, username: &str, pass: &str) -> AppResult<User> {
        validate_credentials(username, pass)
            .map_err(|e| AppError::Validation(e.message))?;

        let hash = password::hash(pass)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        let id = self.store.insert(username, &hash).await?;

        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("User {} vanished after insert", id)))
    }

    /// Overwrites username and password of an existing account.
    pub async fn update(&self, id: i64, username: &str, pass: &str) -> AppResult<User> {
        validate_credentials(username, pass)
            .map_err(|e| AppError::Validation(e.message))?;

        let hash = password::hash(pass)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        let matched = self.store.update(id, username, &hash).await?;
        if !matched {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Idempotent: deleting an unknown id is a success.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    async fn setup_manager() -> AccountManager {
        let pool = SqlitePool::connect(":memory:")
            .await
            .expect("Failed to create in-memory SQLite pool");
        sqlx::migrate!("./src/db/migrations")
            .run(&pool)
            .await
            .expect("Migration failed");
        AccountManager::new(UserStore::new(pool))
    }

    #[tokio::test]
    async fn test_create_hashes_password_before_storing() {
        let mgr = setup_manager().await;
        let user = mgr.create("alice", "secret1").await.expect("Should create");

        assert_eq!(user.username, "alice");
        assert_ne!(user.password, "secret1");
        assert!(user.password.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_invalid_username_creates_no_record() {
        let mgr = setup_manager().await;
        let err = mgr.create("bad name!", "secret1").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = mgr.get_by_id(1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)), "No record should have been created");
    }

    #[tokio::test]
    async fn test_duplicate_create_fails_with_conflict() {
        let mgr = setup_manager().await;
        mgr.create("alice", "secret1").await.expect("First create should succeed");

        let err = mgr.create("alice", "other-pass").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateUsername(_)));
    }

    #[tokio::test]
    async fn test_update_then_get_returns_new_username() {
        let mgr = setup_manager().await;
        let user = mgr.create("alice", "secret1").await.expect("Should create");

        mgr.update(user.id, "bob", "newpass1").await.expect("Update should succeed");

        let fetched = mgr.get_by_id(user.id).await.expect("Should fetch");
        assert_eq!(fetched.username, "bob");
        assert!(password::verify("newpass1", &fetched.password));
        assert!(!password::verify("secret1", &fetched.password));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let mgr = setup_manager().await;
        let err = mgr.update(42, "alice", "secret1").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_validates_before_touching_store() {
        let mgr = setup_manager().await;
        let user = mgr.create("alice", "secret1").await.expect("Should create");

        let err = mgr.update(user.id, "alice", "short").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        // Record unchanged
        let fetched = mgr.get_by_id(user.id).await.expect("Should fetch");
        assert!(password::verify("secret1", &fetched.password));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let mgr = setup_manager().await;
        mgr.delete(99).await.expect("Deleting a non-existent id should not error");
    }
}
