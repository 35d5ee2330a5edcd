use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::CreateTopicRequest;
use super::TopicData;
use crate::domain::auth::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ErrorResponseData;
use crate::inbound::http::router::AppState;

/// Open a new topic.
#[utoipa::path(
    post,
    path = "/topics",
    tag = "Topics",
    security(("bearer-key" = [])),
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = TopicData,
            headers(("Location" = String, description = "Path of the new topic"))),
        (status = 400, description = "Blank or missing fields", body = ErrorResponseData),
        (status = 401, description = "Invalid or expired token", body = ErrorResponseData),
        (status = 403, description = "Authentication required", body = ErrorResponseData),
    )
)]
pub async fn create_topic(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Json(req): Json<CreateTopicRequest>,
) -> Result<ApiSuccess<TopicData>, ApiError> {
    let command = req.try_into_command()?;

    tracing::debug!(user_id = %principal.user_id, "Creating topic");

    state
        .topic_service
        .create_topic(command)
        .await
        .map_err(ApiError::from)
        .map(|ref topic| ApiSuccess::created(format!("/topics/{}", topic.id), topic.into()))
}
