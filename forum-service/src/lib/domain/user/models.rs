use std::collections::BTreeSet;
use std::fmt;

use crate::user::errors::LoginError;

/// User aggregate entity.
///
/// The identity a forum member logs in as. Users are provisioned out of band
/// and never modified by this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub login: Login,
    pub secret_hash: String,
    pub roles: BTreeSet<Role>,
}

impl User {
    /// Build a user carrying the default role set.
    pub fn new(id: UserId, login: Login, secret_hash: String) -> Self {
        Self {
            id,
            login,
            secret_hash,
            roles: Role::defaults(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login value type
///
/// Unique per user. Only required to be non-blank; it is matched verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    /// Create a new login.
    ///
    /// # Errors
    /// * `Blank` - Login is empty or whitespace only
    pub fn new(login: impl Into<String>) -> Result<Self, LoginError> {
        let login = login.into();
        if login.trim().is_empty() {
            return Err(LoginError::Blank);
        }
        Ok(Self(login))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Capability granted to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    User,
}

impl Role {
    /// Roles every user holds.
    pub fn defaults() -> BTreeSet<Role> {
        BTreeSet::from([Role::User])
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
        }
    }
}
