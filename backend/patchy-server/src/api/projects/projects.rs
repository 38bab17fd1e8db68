//! Project REST API handlers

use crate::models::project::Project;
use crate::{
    ApiError, ApiResult, AppState, CreateProjectRequest, Patch, ProjectDto, ProjectResponse,
    ProjectRules, ProjectUpdateResponse, UpdateProjectRequest, apply_project_patch,
    sanitize_string,
};

use patchy_core::{ErrorRecord, RuleSet};

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/projects/{id}
///
/// Get a single project by ID
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let project = state
        .store
        .find_project(project_id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", id)))?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// POST /api/v1/projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let candidate = UpdateProjectRequest {
        key: Some(req.key),
        title: Some(sanitize_string(&req.title)),
        description: req.description.as_deref().map(sanitize_string),
        status: Some(crate::models::project::DEFAULT_PROJECT_STATUS.to_string()),
    };

    let errors: ErrorRecord = ProjectRules::new(&state.validation)
        .check(&candidate)
        .into_iter()
        .collect();
    if errors.has_errors() {
        return Err(ApiError::rejected(errors));
    }

    let project = state
        .store
        .insert_project(Project::new(
            candidate.key.unwrap_or_default(),
            candidate.title.unwrap_or_default(),
            candidate.description,
        ))
        .await;

    log::info!("Created project {} ({}) via REST API", project.id, project.key);

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// PATCH /api/v1/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Patch(patch): Patch<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectUpdateResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let (project, changes) = state
        .store
        .modify_project(project_id, |project| apply_project_patch(project, &patch))
        .await
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", id)))?;

    log::info!(
        "Updated project {} via REST API ({} change(s))",
        project.key,
        changes.len()
    );

    Ok(Json(ProjectUpdateResponse {
        project: ProjectDto::from(project),
        changes,
    }))
}
