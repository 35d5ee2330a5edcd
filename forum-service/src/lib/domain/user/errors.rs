use thiserror::Error;

/// Error for Login validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("must not be blank")]
    Blank,
}

/// Top-level error for credential store operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid login: {0}")]
    InvalidLogin(#[from] LoginError),

    // Same variant for an unknown login and a wrong secret
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found with login: {0}")]
    NotFoundByLogin(String),

    #[error("Password error: {0}")]
    Password(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<auth::PasswordError> for UserError {
    fn from(err: auth::PasswordError) -> Self {
        UserError::Password(err.to_string())
    }
}
