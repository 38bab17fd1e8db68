use crate::ApiError;

use patchy_core::{
    ConstructionError, DecodeError, ErrorRecord, ResolveError, ValidationError,
};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Item not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Item not found");
    assert!(json["error"].get("errors").is_none());
}

#[tokio::test]
async fn test_rejected_returns_400_with_every_error() {
    let errors: ErrorRecord = [
        ValidationError::binding("story_points", "Invalid value: expected i32"),
        ValidationError::field("title", "length", "title too long"),
        ValidationError::global("locked", "work item is locked"),
    ]
    .into_iter()
    .collect();

    let (status, json) = body_json(ApiError::rejected(errors)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    let listed = json["error"]["errors"].as_array().unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0]["field"], "story_points");
    assert_eq!(listed[0]["kind"], "binding");
    assert_eq!(listed[1]["code"], "length");
    assert!(listed[2].get("field").is_none());
}

#[tokio::test]
async fn test_decode_error_maps_to_malformed_payload() {
    let source = serde_json::from_slice::<serde_json::Value>(b"{oops").unwrap_err();
    let error = ApiError::from(ResolveError::from(DecodeError::malformed(source)));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "MALFORMED_PAYLOAD");
}

#[tokio::test]
async fn test_not_an_object_maps_to_malformed_payload_naming_the_type() {
    let error = ApiError::from(ResolveError::from(DecodeError::not_an_object("array")));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]["message"].as_str().unwrap().contains("array"));
}

#[tokio::test]
async fn test_construction_error_maps_to_generic_500() {
    let error = ApiError::from(ResolveError::from(
        ConstructionError::unregistered::<crate::UpdateWorkItemRequest>(),
    ));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(!message.contains("UpdateWorkItemRequest"));
}

#[tokio::test]
async fn test_unsupported_media_type_returns_415() {
    let error = ApiError::UnsupportedMediaType {
        message: "Expected application/json, got text/plain".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(json["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
}

#[tokio::test]
async fn test_uuid_error_maps_to_validation() {
    let error = ApiError::from(uuid::Uuid::parse_str("not-a-uuid").unwrap_err());

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Invalid UUID")
    );
}
