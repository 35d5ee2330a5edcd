use axum::Json;
use utoipa::openapi::security::HttpAuthScheme;
use utoipa::openapi::security::HttpBuilder;
use utoipa::openapi::security::SecurityScheme;
use utoipa::Modify;
use utoipa::OpenApi;

use super::handlers;
use super::handlers::login;
use super::handlers::topics;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Name protected operations refer to in their `security` requirement.
pub const BEARER_SCHEME: &str = "bearer-key";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum Hub API",
        description = "Topics of a course forum, behind bearer token authentication"
    ),
    paths(
        login::login,
        topics::create_topic::create_topic,
        topics::list_topics::list_topics,
        topics::get_topic::get_topic,
        topics::update_topic::update_topic,
        topics::delete_topic::delete_topic,
    ),
    components(schemas(
        login::LoginRequestBody,
        login::LoginResponseData,
        topics::CreateTopicRequest,
        topics::UpdateTopicRequest,
        topics::TopicData,
        topics::TopicDetailData,
        topics::TopicPageData,
        topics::DeleteTopicResponseData,
        handlers::ErrorResponseData,
        handlers::FieldViolation,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "Authentication", description = "Token issuance"),
        (name = "Topics", description = "Topic management")
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Serves the generated OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
