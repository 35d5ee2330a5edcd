//! Authentication utilities for the forum service
//!
//! Provides the token and credential primitives the service builds on:
//! - Access token issuance and verification (`TokenService`, HS256 JWT)
//! - Password hashing (Argon2id)
//! - Credential verification with uniform rejection (`Authenticator`)
//!
//! # Examples
//!
//! ## Access tokens
//! ```
//! use auth::{FixedClock, SigningSecret, TokenService, TokenSubject};
//!
//! let secret = SigningSecret::new("s3cr3t").unwrap();
//! let tokens = TokenService::new(&secret)
//!     .unwrap()
//!     .with_clock(FixedClock::parse("2024-01-01T10:00:00-05:00").unwrap());
//!
//! let token = tokens.issue(&TokenSubject { id: 7, login: "ana" }).unwrap();
//! let login = tokens.verify_and_extract_subject(Some(token.as_str())).unwrap();
//! assert_eq!(login, "ana");
//! ```
//!
//! ## Credentials
//! ```
//! use auth::{AuthenticationError, Authenticator};
//!
//! let authenticator = Authenticator::new().unwrap();
//! let hash = authenticator.hash_password("s3cr3t").unwrap();
//!
//! assert!(authenticator.verify_credentials("s3cr3t", Some(hash.as_str())).is_ok());
//! assert_eq!(
//!     authenticator.verify_credentials("s3cr3t", None),
//!     Err(AuthenticationError::InvalidCredentials)
//! );
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;
pub mod secret;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use secret::SigningSecret;
pub use token::TokenError;
pub use token::TokenService;
pub use token::TokenSubject;
pub use token::ISSUER;
