use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use utoipa::IntoParams;

use super::TopicPageData;
use crate::domain::topic::models::PageRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ErrorResponseData;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page number
    pub page: Option<u32>,
    /// Page size, 10 by default, at most 100
    pub size: Option<u32>,
}

/// Unanswered topics, oldest first.
#[utoipa::path(
    get,
    path = "/topics",
    tag = "Topics",
    security(("bearer-key" = [])),
    params(PageParams),
    responses(
        (status = 200, description = "Page of unanswered topics", body = TopicPageData),
        (status = 401, description = "Invalid or expired token", body = ErrorResponseData),
        (status = 403, description = "Authentication required", body = ErrorResponseData),
    )
)]
pub async fn list_topics(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<ApiSuccess<TopicPageData>, ApiError> {
    state
        .topic_service
        .list_unanswered(PageRequest::new(params.page, params.size))
        .await
        .map_err(ApiError::from)
        .map(|page| ApiSuccess::new(StatusCode::OK, page.into()))
}
