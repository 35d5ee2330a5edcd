use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::topics::create_topic;
use super::handlers::topics::delete_topic;
use super::handlers::topics::get_topic;
use super::handlers::topics::list_topics;
use super::handlers::topics::update_topic;
use super::middleware::authenticate;
use super::middleware::require_authentication;
use super::openapi::openapi_json;
use super::openapi::OPENAPI_PATH;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::topic::ports::TopicServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub topic_service: Arc<dyn TopicServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    topic_service: Arc<dyn TopicServicePort>,
) -> Router {
    let state = AppState {
        auth_service,
        topic_service,
    };

    let public_routes = Router::new()
        .route("/login", post(login))
        .route(OPENAPI_PATH, get(openapi_json));

    let protected_routes = Router::new()
        .route("/topics", post(create_topic).get(list_topics))
        .route(
            "/topics/:topic_id",
            get(get_topic).put(update_topic).delete(delete_topic),
        )
        .route_layer(middleware::from_fn(require_authentication));

    // Headers are left out of the span so bearer tokens never reach the logs
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
