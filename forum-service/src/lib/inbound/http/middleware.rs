use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::user::models::Role;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::AUTHENTICATION_REQUIRED;
use crate::inbound::http::handlers::INVALID_TOKEN;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Establishes the caller's identity from a bearer token.
///
/// Runs once per request. Requests without an `Authorization` header pass
/// through anonymously; a header that is present but unusable ends the
/// request with 401.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(token) = bearer_token(&req)? else {
        return Ok(next.run(req).await);
    };

    let principal = state
        .auth_service
        .resolve_principal(Some(token.as_str()))
        .await
        .map_err(|e| {
            match &e {
                AuthError::InvalidToken(kind) => {
                    tracing::warn!(reason = %kind, "Bearer token rejected")
                }
                AuthError::UnknownSubject => {
                    tracing::warn!("Bearer token names an unknown user")
                }
                _ => {}
            }
            ApiError::from(e).into_response()
        })?;

    tracing::debug!(
        user_id = %principal.user_id,
        roles = ?principal.roles.iter().map(Role::as_str).collect::<Vec<_>>(),
        "Request authenticated"
    );

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// Rejects requests that reached a protected route without an identity.
pub async fn require_authentication(req: Request, next: Next) -> Result<Response, Response> {
    if req.extensions().get::<AuthenticatedUser>().is_none() {
        return Err(ApiError::Forbidden(AUTHENTICATION_REQUIRED.to_string()).into_response());
    }

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Result<Option<String>, Response> {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let rejected = || {
        tracing::warn!("Malformed Authorization header");
        ApiError::Unauthorized(INVALID_TOKEN.to_string()).into_response()
    };

    let value = value.to_str().map_err(|_| rejected())?;

    value
        .strip_prefix(BEARER_PREFIX)
        .map(|token| Some(token.trim().to_string()))
        .ok_or_else(rejected)
}
