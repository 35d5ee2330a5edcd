use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::auth::models::LoginCommand;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange a login and secret for a signed access token.
    ///
    /// # Arguments
    /// * `command` - Login and plaintext secret
    ///
    /// # Returns
    /// Access token for the authenticated user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown login or wrong secret
    /// * `TokenIssuance` - Signing failed
    /// * `CredentialStore` - Lookup failed
    async fn authenticate(&self, command: LoginCommand) -> Result<AccessToken, AuthError>;

    /// Resolve the user a bearer token was issued to.
    ///
    /// # Arguments
    /// * `token` - Token taken from the request, `None` if absent
    ///
    /// # Returns
    /// The authenticated user for this request
    ///
    /// # Errors
    /// * `InvalidToken` - Token missing, malformed, forged, foreign or expired
    /// * `UnknownSubject` - Token names a login that no longer exists
    /// * `CredentialStore` - Lookup failed
    async fn resolve_principal(&self, token: Option<&str>)
        -> Result<AuthenticatedUser, AuthError>;
}
