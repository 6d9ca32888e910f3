// User service: signup and credential verification

use crate::storage::{password, CreateUserRow, StorageBackend, UserRow};

/// Why a signup was rejected
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("email already registered")]
    EmailTaken,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Why a signin was rejected
///
/// "No such user" and "wrong password" collapse into InvalidCredentials so
/// the API never reveals which one it was.
#[derive(Debug, thiserror::Error)]
pub enum SigninError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct UserService {
    db: StorageBackend,
}

impl UserService {
    pub fn new(db: StorageBackend) -> Self {
        Self { db }
    }

    /// Create a new account. The password is hashed before anything is
    /// stored; the plaintext never leaves this function.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<UserRow, SignupError> {
        if self.db.get_user_by_email(email).await?.is_some() {
            return Err(SignupError::EmailTaken);
        }

        let password_hash = password::hash_password(password)?;

        let user = self
            .db
            .create_user(CreateUserRow {
                email: email.to_string(),
                name: name.to_string(),
                password_hash,
            })
            .await?;

        Ok(user)
    }

    /// Verify credentials and return the matching user
    pub async fn signin(&self, email: &str, password: &str) -> Result<UserRow, SigninError> {
        let user = self
            .db
            .get_user_by_email(email)
            .await?
            .ok_or(SigninError::InvalidCredentials)?;

        let valid = password::verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(SigninError::InvalidCredentials);
        }

        Ok(user)
    }
}
