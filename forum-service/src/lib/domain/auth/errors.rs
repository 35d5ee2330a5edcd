use auth::TokenError;
use thiserror::Error;

/// Top-level error for authentication and request authorization
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] TokenError),

    #[error("Token subject does not match any user")]
    UnknownSubject,

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    // Infrastructure errors
    #[error("Credential store error: {0}")]
    CredentialStore(String),
}
