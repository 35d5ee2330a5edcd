use std::collections::BTreeSet;

use crate::domain::user::models::Login;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Command to exchange credentials for an access token
#[derive(Debug)]
pub struct LoginCommand {
    pub login: Login,
    pub secret: String,
}

impl LoginCommand {
    pub fn new(login: Login, secret: String) -> Self {
        Self { login, secret }
    }
}

/// Signed bearer token handed to a client after login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Identity established for the duration of one request.
///
/// Inserted into the request extensions by the authentication middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub login: Login,
    pub roles: BTreeSet<Role>,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            login: user.login,
            roles: user.roles,
        }
    }
}
