mod common;

use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use common::LOGIN;
use common::PASSWORD;
use common::SECRET;
use common::USER_ID;
use forum_service::domain::user::models::Login;
use forum_service::domain::user::models::User;
use forum_service::domain::user::models::UserId;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_login_returns_token() {
    let app = TestApp::spawn().await;

    let response = app.login(LOGIN, PASSWORD).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().expect("Missing token");
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_wrong_secret_and_unknown_login_are_indistinguishable() {
    let app = TestApp::spawn().await;

    let wrong_secret = app.login(LOGIN, "not-the-secret").await;
    let unknown_login = app.login("ghost", PASSWORD).await;

    assert_eq!(wrong_secret.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_login.status(), StatusCode::UNAUTHORIZED);

    let wrong_secret_body = wrong_secret.text().await.unwrap();
    let unknown_login_body = unknown_login.text().await.unwrap();
    assert_eq!(wrong_secret_body, unknown_login_body);
    assert_eq!(
        serde_json::from_str::<Value>(&wrong_secret_body).unwrap(),
        json!({ "error": "Invalid credentials" })
    );
}

#[tokio::test]
async fn test_corrupt_stored_hash_is_rejected_like_a_wrong_secret() {
    let app = TestApp::spawn().await;
    app.users.insert(User::new(
        UserId(USER_ID + 1),
        Login::new("bea").unwrap(),
        "not-a-phc-string".to_string(),
    ));

    let response = app.login("bea", PASSWORD).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "Invalid credentials" }));
}

#[tokio::test]
async fn test_login_with_blank_fields_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app.login("", "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["fields"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_issued_token_opens_protected_routes() {
    let app = TestApp::spawn().await;
    let token = app.login_token().await;

    let response = app
        .get_authenticated("/topics", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_token_is_forbidden() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/topics")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "Authentication required" }));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.token_signed_with(SECRET, Utc::now() - Duration::hours(3));

    let response = app
        .get_authenticated("/topics", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "Invalid or expired token" }));
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.token_signed_with("someone-elses-secret", Utc::now());

    let response = app
        .get_authenticated("/topics", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_and_non_bearer_headers_are_rejected() {
    let app = TestApp::spawn().await;

    for header in ["Bearer not-a-token", "Bearer ", "Basic YW5hOnMzY3IzdA=="] {
        let response = app
            .get("/topics")
            .header("Authorization", header)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", header);
    }
}

#[tokio::test]
async fn test_token_for_removed_user_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.login_token().await;

    let other_app = TestApp::spawn().await;
    other_app.users.clear();

    let response = other_app
        .get_authenticated("/topics", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_api_document_is_served_without_a_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api-docs/openapi.json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["paths"]["/login"]["post"].is_object());
    assert_eq!(
        body["components"]["securitySchemes"]["bearer-key"]["scheme"],
        "bearer"
    );
}
