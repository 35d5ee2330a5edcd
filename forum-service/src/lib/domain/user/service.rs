use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::models::Login;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::CredentialStore;
use crate::user::ports::UserRepository;

/// Credential store backed by a user repository.
///
/// Secrets are checked with `auth::Authenticator`, which burns one hash
/// verification for unknown logins so they cost as much as a wrong secret.
pub struct CredentialService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Authenticator,
}

impl<UR> CredentialService<UR>
where
    UR: UserRepository,
{
    /// Create a new credential service.
    ///
    /// # Errors
    /// * `Password` - The authenticator could not be initialised
    pub fn new(repository: Arc<UR>) -> Result<Self, UserError> {
        Ok(Self {
            repository,
            authenticator: Authenticator::new()?,
        })
    }
}

#[async_trait]
impl<UR> CredentialStore for CredentialService<UR>
where
    UR: UserRepository,
{
    async fn authenticate(&self, login: &Login, secret: &str) -> Result<User, UserError> {
        let user = self.repository.find_by_login(login).await?;
        let stored_hash = user.as_ref().map(|u| u.secret_hash.as_str());

        match self.authenticator.verify_credentials(secret, stored_hash) {
            Ok(()) => user.ok_or(UserError::InvalidCredentials),
            Err(AuthenticationError::InvalidCredentials) => Err(UserError::InvalidCredentials),
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::error!(login = %login, error = %e, "Stored secret hash could not be verified");
                Err(UserError::InvalidCredentials)
            }
        }
    }

    async fn find_by_login(&self, login: &Login) -> Result<User, UserError> {
        self.repository
            .find_by_login(login)
            .await?
            .ok_or_else(|| UserError::NotFoundByLogin(login.to_string()))
    }
}
