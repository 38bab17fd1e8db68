use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "resolver": {
                "schemas": state.resolver.registry().len(),
            },
            "store": {
                "projects": state.store.project_count().await,
                "work_items": state.store.work_item_count().await,
            },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Kubernetes liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Kubernetes readiness probe (ready to accept traffic?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.resolver.registry().is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "No patch schemas registered").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}
