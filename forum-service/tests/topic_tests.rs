mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_create_topic_success() {
    let app = TestApp::spawn().await;
    let token = app.login_token().await;

    let response = app
        .post_authenticated("/topics", &token)
        .json(&json!({
            "title": "Ownership",
            "message": "How do lifetimes work?",
            "author": "ana",
            "course": "Rust",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("Missing id");

    assert_eq!(location, Some(format!("/topics/{}", id)));
    assert_eq!(body["title"], "Ownership");
    assert_eq!(body["course"], "Rust");
}

#[tokio::test]
async fn test_create_topic_with_blank_fields_is_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.login_token().await;

    let response = app
        .post_authenticated("/topics", &token)
        .json(&json!({
            "title": "Ownership",
            "message": " ",
            "course": "Rust",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({
            "error": "Validation failed",
            "fields": [
                { "field": "message", "error": "must not be blank" },
                { "field": "author", "error": "must not be blank" },
            ],
        })
    );
}

#[tokio::test]
async fn test_get_topic_success() {
    let app = TestApp::spawn().await;
    let token = app.login_token().await;
    let id = app.create_topic(&token, "Ownership").await;

    let response = app
        .get_authenticated(&format!("/topics/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Ownership");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_get_unknown_topic_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.login_token().await;

    let response = app
        .get_authenticated("/topics/999", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "ID 999 does not exist." }));
}

#[tokio::test]
async fn test_list_returns_unanswered_topics_oldest_first() {
    let app = TestApp::spawn().await;
    let token = app.login_token().await;

    let first = app.create_topic(&token, "First").await;
    let answered = app.create_topic(&token, "Answered").await;
    let third = app.create_topic(&token, "Third").await;
    app.topics.mark_answered(answered);

    let response = app
        .get_authenticated("/topics", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let ids: Vec<i64> = body["content"]
        .as_array()
        .expect("Missing content")
        .iter()
        .filter_map(|topic| topic["id"].as_i64())
        .collect();

    assert_eq!(ids, vec![first, third]);
    assert_eq!(body["page"], 0);
    assert_eq!(body["size"], 10);
    assert_eq!(body["total_elements"], 2);
    assert_eq!(body["total_pages"], 1);
}

#[tokio::test]
async fn test_list_pagination() {
    let app = TestApp::spawn().await;
    let token = app.login_token().await;

    for title in ["One", "Two", "Three"] {
        app.create_topic(&token, title).await;
    }

    let response = app
        .get_authenticated("/topics?page=1&size=2", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["content"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["content"][0]["title"], "Three");
    assert_eq!(body["total_elements"], 3);
    assert_eq!(body["total_pages"], 2);
}

#[tokio::test]
async fn test_update_topic_changes_only_provided_fields() {
    let app = TestApp::spawn().await;
    let token = app.login_token().await;
    let id = app.create_topic(&token, "Ownership").await;

    let response = app
        .put_authenticated(&format!("/topics/{}", id), &token)
        .json(&json!({ "id": id, "title": "Borrowing" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Borrowing");
    assert_eq!(body["message"], "How does borrowing work?");
    assert_eq!(body["course"], "Rust");
}

#[tokio::test]
async fn test_update_with_mismatched_id_is_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.login_token().await;
    let id = app.create_topic(&token, "Ownership").await;

    let response = app
        .put_authenticated(&format!("/topics/{}", id), &token)
        .json(&json!({ "id": id + 1, "title": "Borrowing" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_topic_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.login_token().await;

    let response = app
        .put_authenticated("/topics/42", &token)
        .json(&json!({ "id": 42, "title": "Borrowing" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_topic() {
    let app = TestApp::spawn().await;
    let token = app.login_token().await;
    let id = app.create_topic(&token, "Ownership").await;

    let response = app
        .delete_authenticated(&format!("/topics/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "Topic deleted" }));

    let response = app
        .delete_authenticated(&format!("/topics/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
