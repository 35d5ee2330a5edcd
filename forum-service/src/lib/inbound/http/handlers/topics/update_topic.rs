use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::TopicData;
use super::UpdateTopicRequest;
use crate::domain::topic::models::TopicId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ErrorResponseData;
use crate::inbound::http::router::AppState;

/// Replace the provided fields of a topic.
#[utoipa::path(
    put,
    path = "/topics/{topic_id}",
    tag = "Topics",
    security(("bearer-key" = [])),
    params(("topic_id" = i64, Path, description = "Topic id")),
    request_body = UpdateTopicRequest,
    responses(
        (status = 200, description = "Topic updated", body = TopicData),
        (status = 400, description = "Blank field or mismatched id", body = ErrorResponseData),
        (status = 401, description = "Invalid or expired token", body = ErrorResponseData),
        (status = 403, description = "Authentication required", body = ErrorResponseData),
        (status = 404, description = "Unknown topic", body = ErrorResponseData),
    )
)]
pub async fn update_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<i64>,
    Json(req): Json<UpdateTopicRequest>,
) -> Result<ApiSuccess<TopicData>, ApiError> {
    if req.id != Some(topic_id) {
        return Err(ApiError::BadRequest(
            "Path id does not match body id".to_string(),
        ));
    }

    let command = req.try_into_command()?;

    state
        .topic_service
        .update_topic(TopicId(topic_id), command)
        .await
        .map_err(ApiError::from)
        .map(|ref topic| ApiSuccess::new(StatusCode::OK, topic.into()))
}
