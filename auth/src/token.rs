use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::FixedOffset;
use chrono::TimeZone;
use thiserror::Error;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::secret::SigningSecret;

/// Issuer embedded in and required from every token.
pub const ISSUER: &str = "foro hub";

/// Token lifetime, in hours.
pub const TOKEN_LIFETIME_HOURS: i64 = 2;

/// Offset (seconds east of UTC) at which the expiry wall-clock time is pinned.
pub const EXPIRY_OFFSET_SECONDS: i32 = -5 * 3600;

/// Identity a token is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSubject<'a> {
    pub id: i64,
    pub login: &'a str,
}

/// Token issuance and verification errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token service misconfigured: {0}")]
    Configuration(String),

    #[error("Failed to sign token: {0}")]
    Encoding(String),

    #[error("No token presented")]
    MissingToken,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token issuer is invalid")]
    InvalidIssuer,

    #[error("Token is expired")]
    Expired,

    #[error("Token has no subject")]
    MissingSubject,
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EncodingFailed(msg) => TokenError::Encoding(msg),
            JwtError::Malformed(msg) => TokenError::Malformed(msg),
            JwtError::InvalidSignature => TokenError::InvalidSignature,
            JwtError::InvalidIssuer => TokenError::InvalidIssuer,
            JwtError::TokenExpired => TokenError::Expired,
            JwtError::MissingClaim(claim) if claim == "iss" => TokenError::InvalidIssuer,
            JwtError::MissingClaim(claim) => {
                TokenError::Malformed(format!("missing claim: {}", claim))
            }
        }
    }
}

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Stateless apart from the immutable signing key and the clock, so one
/// instance is shared by every request.
pub struct TokenService {
    handler: JwtHandler,
    clock: Arc<dyn Clock>,
    expiry_offset: FixedOffset,
}

impl TokenService {
    /// Create a token service signing with `secret` and the system clock.
    ///
    /// # Errors
    /// * `Configuration` - The secret is empty
    pub fn new(secret: &SigningSecret) -> Result<Self, TokenError> {
        secret.ensure_present()?;

        let expiry_offset = FixedOffset::east_opt(EXPIRY_OFFSET_SECONDS).ok_or_else(|| {
            TokenError::Configuration("invalid expiry offset".to_string())
        })?;

        Ok(Self {
            handler: JwtHandler::new(secret.as_bytes(), ISSUER),
            clock: Arc::new(SystemClock),
            expiry_offset,
        })
    }

    /// Replace the clock used for issuance and expiry checks.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Expiry that a token issued right now would carry.
    ///
    /// The host's local wall-clock time plus the lifetime is read as a time
    /// at UTC-05:00, whatever the host timezone is.
    pub fn expires_at(&self) -> Result<DateTime<FixedOffset>, TokenError> {
        let wall_clock = self.clock.now_local() + Duration::hours(TOKEN_LIFETIME_HOURS);

        self.expiry_offset
            .from_local_datetime(&wall_clock)
            .single()
            .ok_or_else(|| TokenError::Encoding(format!("unrepresentable expiry {}", wall_clock)))
    }

    /// Issue a signed token for `subject`.
    ///
    /// # Errors
    /// * `Encoding` - Signing failed
    pub fn issue(&self, subject: &TokenSubject<'_>) -> Result<String, TokenError> {
        let claims = Claims::new()
            .with_issuer(ISSUER)
            .with_subject(subject.login)
            .with_id(subject.id)
            .with_expiration(self.expires_at()?.timestamp());

        Ok(self.handler.encode(&claims)?)
    }

    /// Verify `token` and return its claims.
    ///
    /// # Errors
    /// * `MissingToken` - No token, or an empty one; nothing is decoded
    /// * `Malformed` / `InvalidSignature` / `InvalidIssuer` - Decoding failed
    /// * `Expired` - The clock is past the token's `exp`
    pub fn decode_claims(&self, token: Option<&str>) -> Result<Claims, TokenError> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or(TokenError::MissingToken)?;

        let claims: Claims = self.handler.decode(token)?;

        if claims.is_expired(self.clock.now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Verify `token` and return its subject (the user login).
    ///
    /// # Errors
    /// Everything `decode_claims` reports, plus `MissingSubject` when a
    /// correctly signed token carries no subject.
    pub fn verify_and_extract_subject(&self, token: Option<&str>) -> Result<String, TokenError> {
        self.decode_claims(token)?
            .subject()
            .map(str::to_string)
            .ok_or(TokenError::MissingSubject)
    }
}
