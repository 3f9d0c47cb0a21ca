/**
 * Password Hashing
 *
 * bcrypt only reads the first 72 bytes of a password, so longer passwords
 * are rejected instead of being silently truncated. Hashing runs on the
 * blocking pool.
 */
use thiserror::Error;

/// Longest password bcrypt will accept, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password cannot be longer than {MAX_PASSWORD_BYTES} bytes. Please choose a shorter password.")]
    TooLong,

    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Reject passwords bcrypt would truncate
pub fn validate_password_length(password: &str) -> Result<(), PasswordError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(PasswordError::TooLong);
    }
    Ok(())
}

/// bcrypt hasher with a configured work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        validate_password_length(password)?;
        let password = password.to_string();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }

    pub async fn verify(&self, password: &str, hashed: &str) -> Result<bool, PasswordError> {
        validate_password_length(password)?;
        let password = password.to_string();
        let hashed = hashed.to_string();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed)).await??;
        Ok(matches)
    }
}
