use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::auth::errors::AuthError;
use crate::domain::topic::errors::TopicError;

pub mod login;
pub mod topics;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const INVALID_TOKEN: &str = "Invalid or expired token";
pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq> {
    status: StatusCode,
    location: Option<String>,
    body: Json<T>,
}

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status && self.location == other.location && self.body.0 == other.body.0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status,
            location: None,
            body: Json(data),
        }
    }

    /// 201 response pointing at the new resource.
    pub fn created(location: String, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            location: Some(location),
            body: Json(data),
        }
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();

        if let Some(location) = self.location {
            match HeaderValue::try_from(location) {
                Ok(value) => {
                    response.headers_mut().insert(header::LOCATION, value);
                }
                Err(e) => tracing::error!(error = %e, "Invalid Location header"),
            }
        }

        response
    }
}

/// A rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    #[schema(value_type = String)]
    pub field: &'static str,
    pub error: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, error: impl ToString) -> Self {
        Self {
            field,
            error: error.to_string(),
        }
    }
}

/// Collects field violations while a request body is turned into a command.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a required field, recording the failure under `field`.
    pub fn check<T, E: ToString>(
        &mut self,
        field: &'static str,
        result: Result<T, E>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.0.push(FieldViolation::new(field, e));
                None
            }
        }
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.0))
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorResponseData {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldViolation>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Validation(Vec<FieldViolation>),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            ApiError::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
            ApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponseData {
                    error: "Validation failed".to_string(),
                    fields: Some(fields),
                }),
            )
                .into_response(),
            ApiError::NotFound(msg) => error_response(StatusCode::NOT_FOUND, &msg),
            ApiError::Unauthorized(msg) => error_response(StatusCode::UNAUTHORIZED, &msg),
            ApiError::Forbidden(msg) => error_response(StatusCode::FORBIDDEN, &msg),
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = ErrorResponseData {
        error: message.to_string(),
        fields: None,
    };

    (status, Json(body)).into_response()
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()),
            AuthError::InvalidToken(_) | AuthError::UnknownSubject => {
                ApiError::Unauthorized(INVALID_TOKEN.to_string())
            }
            AuthError::TokenIssuance(_) | AuthError::CredentialStore(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<TopicError> for ApiError {
    fn from(err: TopicError) -> Self {
        match err {
            TopicError::NotFound(_) => ApiError::NotFound(err.to_string()),
            TopicError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}
