#![allow(dead_code)]

//! Test infrastructure for patchy-server API tests

use patchy_config::Config;
use patchy_server::AppState;
use patchy_server::routes::build_router;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Create AppState for testing with default limits
pub fn create_test_app_state() -> AppState {
    AppState::new(&Config::default())
}

/// Send one request through a fresh router and decode the JSON response
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| json!(String::from_utf8_lossy(&body)))
    };
    (status, json)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Create a test project through the API, returning its id
pub async fn create_test_project(app: &Router) -> String {
    let (status, json) = send(
        app,
        json_request(
            "POST",
            "/api/v1/projects",
            json!({"key": "TEST", "title": "Test Project", "description": "A test project"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["project"]["id"].as_str().unwrap().to_string()
}

/// Create a test work item through the API, returning its id
pub async fn create_test_work_item(app: &Router, project_id: &str) -> String {
    let (status, json) = send(
        app,
        json_request(
            "POST",
            "/api/v1/work-items",
            json!({
                "project_id": project_id,
                "title": "Test Work Item",
                "description": "A test work item",
                "status": "todo",
                "story_points": 3,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["work_item"]["id"].as_str().unwrap().to_string()
}

pub fn test_router() -> Router {
    build_router(create_test_app_state())
}
