/**
 * Authentication Handler Types
 *
 * Request bodies for registration and login, their validation, and the
 * response shared by both handlers.
 */
use crate::shared::SharedError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum password length, in characters
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Check field rules and trim the username
    pub fn validate(mut self) -> Result<Self, SharedError> {
        self.username = self.username.trim().to_string();
        if self.username.is_empty() {
            return Err(SharedError::validation("username", "Username cannot be empty"));
        }
        validate_email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(SharedError::validation(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_CHARS),
            ));
        }
        Ok(self)
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(self) -> Result<Self, SharedError> {
        validate_email(&self.email)?;
        Ok(self)
    }
}

/// Accept addresses of the form `local@domain.tld`
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    let invalid = || SharedError::validation("email", "value is not a valid email address");

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let well_formed = !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !domain.ends_with('.'));

    if well_formed {
        Ok(())
    } else {
        Err(invalid())
    }
}

/// Auth response returned by register and login
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub message: String,
    /// JWT token (30-day expiration)
    pub token: String,
    pub user: UserResponse,
}

/// User information safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<crate::backend::store::User> for UserResponse {
    fn from(user: crate::backend::store::User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            email: user.email,
        }
    }
}
