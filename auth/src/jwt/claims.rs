use serde::Deserialize;
use serde::Serialize;

/// Claims carried by forum access tokens.
///
/// Field order is the serialization order, so a given set of claims always
/// encodes to the same payload. All fields are optional on the decoding side
/// so a token missing one of them is reported as such instead of failing as
/// an opaque deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Claims {
    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Subject (user login)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// User identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl ToString) -> Self {
        self.iss = Some(iss.to_string());
        self
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set the user identifier claim.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Subject, if present and not blank.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Check if token is expired.
    ///
    /// A token is still valid during the second named by `exp`. Claims
    /// without `exp` are reported as expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(true, |exp| exp < current_timestamp)
    }
}
