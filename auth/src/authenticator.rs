use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Secret hashed once at construction and verified against whenever a login
/// is unknown, so both rejection paths pay for one Argon2 verification.
const DECOY_SECRET: &str = "decoy-secret-never-matches";

/// Credential verification with uniform rejection.
///
/// Callers hand over the stored hash of the identity being logged into, or
/// `None` when no such identity exists. Both an unknown identity and a wrong
/// secret come back as `InvalidCredentials` after the same amount of work.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    decoy_hash: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing the decoy secret failed
    pub fn new() -> Result<Self, PasswordError> {
        let password_hasher = PasswordHasher::new();
        let decoy_hash = password_hasher.hash(DECOY_SECRET)?;

        Ok(Self {
            password_hasher,
            decoy_hash,
        })
    }

    /// Hash a secret for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a presented secret against the stored hash, if any.
    ///
    /// # Arguments
    /// * `password` - Plaintext secret presented by the caller
    /// * `stored_hash` - Hash of the matching identity, `None` if unknown
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identity or wrong secret
    /// * `PasswordError` - The stored hash is unusable
    pub fn verify_credentials(
        &self,
        password: &str,
        stored_hash: Option<&str>,
    ) -> Result<(), AuthenticationError> {
        let Some(stored_hash) = stored_hash else {
            // Result ignored: the outcome is a rejection either way.
            let _ = self.password_hasher.verify(password, &self.decoy_hash);
            return Err(AuthenticationError::InvalidCredentials);
        };

        if self.password_hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }
}
