use crate::api::extractors::patch::is_json_content_type;
use crate::tests::api::test_state;
use crate::{ApiError, Patch, PatchWithErrors, UpdateWorkItemRequest};

use patchy_core::FieldPresence;

use axum::{body::Body, extract::FromRequest, http::HeaderValue, http::Request};
use serde_json::json;

fn patch_request(content_type: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder().method("PATCH").uri("/");
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }
    builder.body(body.into()).unwrap()
}

#[tokio::test]
async fn test_patch_extractor_binds_supplied_fields() {
    let state = test_state();
    let request = patch_request(
        Some("application/json"),
        json!({"title": "  New title ", "story_points": null}).to_string(),
    );

    let result = Patch::<UpdateWorkItemRequest>::from_request(request, &state).await;

    let Patch(patch) = result.ok().unwrap();
    assert_eq!(patch.title.as_deref(), Some("  New title "));
    assert!(patch.was_supplied("story_points"));
    assert!(!patch.was_supplied("status"));
}

#[tokio::test]
async fn test_patch_extractor_accepts_empty_body_without_content_type() {
    let state = test_state();
    let request = patch_request(None, Body::empty());

    let result = Patch::<UpdateWorkItemRequest>::from_request(request, &state).await;

    let Patch(patch) = result.ok().unwrap();
    assert!(patch.supplied_fields().is_empty());
}

#[tokio::test]
async fn test_patch_extractor_rejects_text_plain() {
    let state = test_state();
    let request = patch_request(Some("text/plain"), "title=hello");

    let result = Patch::<UpdateWorkItemRequest>::from_request(request, &state).await;

    assert!(matches!(
        result,
        Err(ApiError::UnsupportedMediaType { .. })
    ));
}

#[tokio::test]
async fn test_patch_extractor_rejects_malformed_json() {
    let state = test_state();
    let request = patch_request(Some("application/json"), "{\"title\": ");

    let result = Patch::<UpdateWorkItemRequest>::from_request(request, &state).await;

    assert!(matches!(result, Err(ApiError::MalformedPayload { .. })));
}

#[tokio::test]
async fn test_patch_extractor_rejects_invalid_supplied_field_only() {
    let state = test_state();
    let request = patch_request(
        Some("application/json"),
        json!({"status": "nope"}).to_string(),
    );

    let result = Patch::<UpdateWorkItemRequest>::from_request(request, &state).await;

    let Err(ApiError::Rejected { errors, .. }) = result else {
        panic!("expected rejection");
    };
    assert_eq!(errors.len(), 1);
    assert!(errors.has_field_error("status"));
    // title is null on the target but was never sent
    assert!(!errors.has_field_error("title"));
}

#[tokio::test]
async fn test_patch_with_errors_extractor_keeps_rule_errors() {
    let state = test_state();
    let request = patch_request(
        Some("application/json"),
        json!({"story_points": "lots", "priority": "high"}).to_string(),
    );

    let result = PatchWithErrors::<UpdateWorkItemRequest>::from_request(request, &state).await;

    let PatchWithErrors(resolution) = result.ok().unwrap();
    assert!(resolution.errors().has_binding_error("story_points"));
    assert_eq!(resolution.target().priority.as_deref(), Some("high"));
}

#[test]
fn test_json_content_types_recognized() {
    let accepted = [
        "application/json",
        "application/json; charset=utf-8",
        "Application/JSON",
        "application/merge-patch+json",
    ];
    let refused = ["text/plain", "application/xml", "multipart/form-data"];

    for value in accepted {
        assert!(is_json_content_type(&HeaderValue::from_static(value)), "{value}");
    }
    for value in refused {
        assert!(!is_json_content_type(&HeaderValue::from_static(value)), "{value}");
    }
}
