use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

use super::ApiError;
use super::ApiSuccess;
use super::ErrorResponseData;
use super::Violations;
use crate::domain::auth::models::LoginCommand;
use crate::domain::user::models::Login;
use crate::inbound::http::router::AppState;

/// Exchange a login and secret for a bearer token.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequestBody,
    responses(
        (status = 200, description = "Token issued", body = LoginResponseData),
        (status = 400, description = "Blank login or secret", body = ErrorResponseData),
        (status = 401, description = "Invalid credentials", body = ErrorResponseData),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .auth_service
        .authenticate(command)
        .await
        .map_err(ApiError::from)
        .map(|token| {
            ApiSuccess::new(
                StatusCode::OK,
                LoginResponseData {
                    token: token.into_inner(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct LoginRequestBody {
    #[serde(default)]
    login: String,
    #[serde(default)]
    secret: String,
}

impl LoginRequestBody {
    fn try_into_command(self) -> Result<LoginCommand, ApiError> {
        let mut violations = Violations::new();

        let login = violations.check("login", Login::new(self.login));
        if self.secret.trim().is_empty() {
            violations.check::<(), _>("secret", Err("must not be blank"));
        }
        violations.into_result()?;

        match login {
            Some(login) => Ok(LoginCommand::new(login, self.secret)),
            None => Err(ApiError::BadRequest("login is required".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LoginResponseData {
    pub token: String,
}
