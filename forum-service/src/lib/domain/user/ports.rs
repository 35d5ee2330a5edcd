use async_trait::async_trait;

use crate::domain::user::models::Login;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Credential store: identity lookup and secret verification.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Verify a login/secret pair.
    ///
    /// # Arguments
    /// * `login` - Login presented by the caller
    /// * `secret` - Plaintext secret presented by the caller
    ///
    /// # Returns
    /// The authenticated user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown login or wrong secret, indistinguishably
    /// * `Password` - Stored hash is unusable
    /// * `DatabaseError` - Lookup failed
    async fn authenticate(&self, login: &Login, secret: &str) -> Result<User, UserError>;

    /// Retrieve user by login.
    ///
    /// # Errors
    /// * `NotFoundByLogin` - No user with this login
    /// * `DatabaseError` - Lookup failed
    async fn find_by_login(&self, login: &Login) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by login.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, UserError>;
}
