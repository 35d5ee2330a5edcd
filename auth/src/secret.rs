use std::fmt;

use serde::Deserialize;

use crate::token::TokenError;

/// Symmetric key used to sign and verify access tokens.
///
/// The value never shows up in `Debug` output, so configuration structs
/// holding it can be logged.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct SigningSecret(String);

impl SigningSecret {
    /// Wrap a secret, rejecting empty or blank values.
    ///
    /// # Errors
    /// * `Configuration` - The secret is empty
    pub fn new(secret: impl Into<String>) -> Result<Self, TokenError> {
        let secret = Self(secret.into());
        secret.ensure_present()?;
        Ok(secret)
    }

    /// Fail when the secret is empty, e.g. after deserializing a config file.
    pub fn ensure_present(&self) -> Result<(), TokenError> {
        if self.0.trim().is_empty() {
            return Err(TokenError::Configuration(
                "signing secret must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}
