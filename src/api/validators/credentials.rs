//! Credential shape validation. Pure: no store access, no side effects.
//! Every endpoint that accepts a username/password pair goes through this
//! one contract.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    pub code: String,
    pub message: String,
    pub field: String,
}

impl ValidationError {
    fn new(code: &str, message: String, field: &str) -> Self {
        Self {
            code: code.to_string(),
            message,
            field: field.to_string(),
        }
    }
}

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 30;
const PASSWORD_MIN: usize = 6;

/// Checks username then password; the first violated rule wins.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    validate_username(username)?;
    validate_password(password)?;
    Ok(())
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    // E001: Empty username
    if username.is_empty() {
        return Err(ValidationError::new(
            "E001",
            "Username cannot be empty".to_string(),
            "username",
        ));
    }

    // E002: Length outside [3, 30]
    let len = username.chars().count();
    if len < USERNAME_MIN || len > USERNAME_MAX {
        return Err(ValidationError::new(
            "E002",
            format!(
                "Username must be between {} and {} characters (got {})",
                USERNAME_MIN, USERNAME_MAX, len
            ),
            "username",
        ));
    }

    // E003: Non-alphanumeric character
    if let Some(c) = username.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(ValidationError::new(
            "E003",
            format!("Username must be alphanumeric; '{}' is not allowed", c),
            "username",
        ));
    }

    Ok(())
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    // E004: Password too short
    if password.chars().count() < PASSWORD_MIN {
        return Err(ValidationError::new(
            "E004",
            format!("Password must be at least {} characters", PASSWORD_MIN),
            "password",
        ));
    }

    Ok(())
}
