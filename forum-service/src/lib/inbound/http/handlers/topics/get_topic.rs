use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::TopicDetailData;
use crate::domain::topic::models::TopicId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ErrorResponseData;
use crate::inbound::http::router::AppState;

#[utoipa::path(
    get,
    path = "/topics/{topic_id}",
    tag = "Topics",
    security(("bearer-key" = [])),
    params(("topic_id" = i64, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic found", body = TopicDetailData),
        (status = 401, description = "Invalid or expired token", body = ErrorResponseData),
        (status = 403, description = "Authentication required", body = ErrorResponseData),
        (status = 404, description = "Unknown topic", body = ErrorResponseData),
    )
)]
pub async fn get_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<i64>,
) -> Result<ApiSuccess<TopicDetailData>, ApiError> {
    state
        .topic_service
        .get_topic(TopicId(topic_id))
        .await
        .map_err(ApiError::from)
        .map(|ref topic| ApiSuccess::new(StatusCode::OK, topic.into()))
}
