//! Login flow: credential verification and session token issuance.

use crate::api::validators::validate_credentials;
use crate::db::users::UserStore;
use crate::error::{AppError, AppResult};

pub mod jwt;
pub mod password;

/// A freshly issued session token and its lifetime in seconds.
#[derive(Debug)]
pub struct LoginToken {
    pub token: String,
    pub expires_in: u64,
}

#[derive(Clone)]
pub struct Authenticator {
    store: UserStore,
    jwt_secret: String,
    jwt_expiry_hours: u64,
}

impl Authenticator {
    pub fn new(store: UserStore, jwt_secret: String, jwt_expiry_hours: u64) -> Self {
        Self { store, jwt_secret, jwt_expiry_hours }
    }

    /// Unknown username and wrong password fail with the same error, so
    /// login responses cannot be used to enumerate usernames.
    pub async fn login(&self, username: &str, pass: &str) -> AppResult<LoginToken> {
        validate_credentials(username, pass)
            .map_err(|e| AppError::Validation(e.message))?;

        let user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !password::verify(pass, &user.password) {
            return Err(AppError::InvalidCredentials);
        }

        let token = jwt::generate(user.id, &user.username, &self.jwt_secret, self.jwt_expiry_hours)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(LoginToken {
            token,
            expires_in: self.jwt_expiry_hours * 3600,
        })
    }
}
