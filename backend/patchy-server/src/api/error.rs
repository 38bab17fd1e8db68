//! REST API error types
//!
//! Every variant renders as `{"error": {code, message, field?, errors?}}`
//! with the matching HTTP status.

use patchy_core::{ConstructionError, DecodeError, ErrorRecord, ResolveError, ValidationError};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Every field and global error of a rejected payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Single-field validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Payload bound but failed its rules (400)
    #[error("Validation failed with {} error(s) {location}", .errors.len())]
    Rejected {
        errors: ErrorRecord,
        location: ErrorLocation,
    },

    /// Payload is not a readable JSON object (400)
    #[error("Malformed payload: {message} {location}")]
    MalformedPayload {
        message: String,
        location: ErrorLocation,
    },

    /// Non-JSON content type on a patch body (415)
    #[error("Unsupported media type: {message} {location}")]
    UnsupportedMediaType {
        message: String,
        location: ErrorLocation,
    },

    /// Body over the configured limit (413)
    #[error("Payload too large: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(errors: ErrorRecord) -> Self {
        ApiError::Rejected {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. }
            | ApiError::Rejected { .. }
            | ApiError::MalformedPayload { .. }
            | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
                errors: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
                errors: None,
            },
            ApiError::Rejected { errors, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message: format!("Validation failed with {} error(s)", errors.len()),
                field: None,
                errors: Some(errors.into_vec()),
            },
            ApiError::MalformedPayload { message, .. } => ApiErrorBody {
                code: "MALFORMED_PAYLOAD".into(),
                message,
                field: None,
                errors: None,
            },
            ApiError::UnsupportedMediaType { message, .. } => ApiErrorBody {
                code: "UNSUPPORTED_MEDIA_TYPE".into(),
                message,
                field: None,
                errors: None,
            },
            ApiError::PayloadTooLarge { message, .. } => ApiErrorBody {
                code: "PAYLOAD_TOO_LARGE".into(),
                message,
                field: None,
                errors: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
                errors: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
                errors: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert pipeline failures to API errors
impl From<ResolveError> for ApiError {
    #[track_caller]
    fn from(e: ResolveError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            ResolveError::Decode(decode) => ApiError::MalformedPayload {
                message: decode_message(&decode),
                location,
            },
            ResolveError::Construction(construction) => {
                // Registration defect; keep type names out of the response
                log::error!("Patch target construction failed: {}", construction);
                let message = match construction {
                    ConstructionError::Unregistered { .. } => "Endpoint is not configured",
                    ConstructionError::Factory { .. } => "Failed to prepare update",
                };
                ApiError::Internal {
                    message: message.to_string(),
                    location,
                }
            }
            ResolveError::Rejected { errors } => ApiError::Rejected { errors, location },
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

fn decode_message(error: &DecodeError) -> String {
    match error {
        DecodeError::Malformed { source, .. } => format!("Malformed JSON payload: {}", source),
        DecodeError::NotAnObject { found, .. } => {
            format!("Payload must be a JSON object, found {}", found)
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
