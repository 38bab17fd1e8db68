use crate::{
    AppState, create_project, create_work_item, get_project, get_work_item, health,
    preview_work_item, update_project, update_work_item,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.max_body_bytes;

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Projects
        .route("/api/v1/projects", post(create_project))
        .route(
            "/api/v1/projects/{id}",
            get(get_project).patch(update_project),
        )
        // Work items
        .route("/api/v1/work-items", post(create_work_item))
        .route(
            "/api/v1/work-items/{id}",
            get(get_work_item).patch(update_work_item),
        )
        .route("/api/v1/work-items/{id}/preview", patch(preview_work_item))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
