use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenService;
use auth::TokenSubject;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::Login;
use crate::user::errors::UserError;
use crate::user::ports::CredentialStore;

/// Authentication gate and bearer token resolution.
///
/// Holds no per-request state; one instance serves every request.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    credential_store: Arc<CS>,
    token_service: Arc<TokenService>,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `credential_store` - Identity lookup and secret verification
    /// * `token_service` - Token issuance and verification
    pub fn new(credential_store: Arc<CS>, token_service: Arc<TokenService>) -> Self {
        Self {
            credential_store,
            token_service,
        }
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn authenticate(&self, command: LoginCommand) -> Result<AccessToken, AuthError> {
        let user = self
            .credential_store
            .authenticate(&command.login, &command.secret)
            .await
            .map_err(|e| match e {
                UserError::InvalidCredentials => {
                    tracing::warn!("Login rejected");
                    AuthError::InvalidCredentials
                }
                other => AuthError::CredentialStore(other.to_string()),
            })?;

        let token = self
            .token_service
            .issue(&TokenSubject {
                id: user.id.0,
                login: user.login.as_str(),
            })
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Failed to issue access token");
                AuthError::TokenIssuance(e.to_string())
            })?;

        tracing::info!(user_id = %user.id, "Access token issued");

        Ok(AccessToken::new(token))
    }

    async fn resolve_principal(
        &self,
        token: Option<&str>,
    ) -> Result<AuthenticatedUser, AuthError> {
        let subject = self.token_service.verify_and_extract_subject(token)?;
        let login = Login::new(subject).map_err(|_| AuthError::UnknownSubject)?;

        let user = self
            .credential_store
            .find_by_login(&login)
            .await
            .map_err(|e| match e {
                UserError::NotFoundByLogin(_) => AuthError::UnknownSubject,
                other => AuthError::CredentialStore(other.to_string()),
            })?;

        Ok(AuthenticatedUser::from(user))
    }
}
