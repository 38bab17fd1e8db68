//! Work Item REST API handlers
//!
//! PATCH goes through the presence-aware resolver: only the fields a client
//! sends are validated and applied.

use crate::models::work_item::{DEFAULT_PRIORITY, DEFAULT_STATUS, WorkItem};
use crate::{
    ApiError, ApiResult, AppState, CreateWorkItemRequest, Patch, PatchWithErrors,
    UpdateWorkItemRequest, WorkItemDto, WorkItemPreviewResponse, WorkItemResponse,
    WorkItemRules, WorkItemUpdateResponse, apply_work_item_patch, sanitize_string,
};

use patchy_core::{ErrorRecord, RuleSet};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/work-items/{id}
///
/// Retrieve a single work item by ID
pub async fn get_work_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<WorkItemResponse>> {
    let work_item_id = Uuid::parse_str(&id)?;

    let work_item = state
        .store
        .find_work_item(work_item_id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Work item {} not found", id)))?;

    let project_key = project_key(&state, work_item.project_id).await?;

    Ok(Json(WorkItemResponse {
        work_item: WorkItemDto::from_work_item(work_item, &project_key),
    }))
}

/// POST /api/v1/work-items
///
/// Create a new work item. Every field is checked, as if all were supplied.
pub async fn create_work_item(
    State(state): State<AppState>,
    Json(req): Json<CreateWorkItemRequest>,
) -> ApiResult<Json<WorkItemResponse>> {
    // 1. Parse IDs
    let project_id = Uuid::parse_str(&req.project_id)?;
    let assignee_id = req
        .assignee_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(Uuid::parse_str)
        .transpose()?;

    // 2. Validate with the same rules a PATCH uses
    let candidate = UpdateWorkItemRequest {
        title: Some(req.title),
        description: req.description,
        status: Some(req.status.unwrap_or_else(|| DEFAULT_STATUS.to_string())),
        priority: Some(req.priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string())),
        story_points: req.story_points,
        assignee_id,
    };

    let errors: ErrorRecord = WorkItemRules::new(&state.validation)
        .check(&candidate)
        .into_iter()
        .collect();
    if errors.has_errors() {
        return Err(ApiError::rejected(errors));
    }

    // 3. Insert with the next item number of the project
    let now = Utc::now();
    let (work_item, project) = state
        .store
        .create_work_item(project_id, |item_number| WorkItem {
            id: Uuid::new_v4(),
            project_id,
            item_number,
            title: candidate.title.as_deref().map(sanitize_string).unwrap_or_default(),
            description: candidate.description.as_deref().map(sanitize_string),
            status: candidate.status.clone().unwrap_or_default(),
            priority: candidate.priority.clone().unwrap_or_default(),
            story_points: candidate.story_points,
            assignee_id: candidate.assignee_id,
            version: 1,
            created_at: now,
            updated_at: now,
        })
        .await
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", project_id)))?;

    log::info!(
        "Created work item {} ({}) via REST API",
        work_item.id,
        work_item.display_key(&project.key)
    );

    Ok(Json(WorkItemResponse {
        work_item: WorkItemDto::from_work_item(work_item, &project.key),
    }))
}

/// PATCH /api/v1/work-items/{id}
///
/// Apply the supplied fields. Omitted fields keep their values; `null`
/// clears a nullable field.
pub async fn update_work_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Patch(patch): Patch<UpdateWorkItemRequest>,
) -> ApiResult<Json<WorkItemUpdateResponse>> {
    let work_item_id = Uuid::parse_str(&id)?;

    let accepted = ErrorRecord::new();
    let (work_item, changes) = state
        .store
        .modify_work_item(work_item_id, |item| {
            apply_work_item_patch(item, &patch, &accepted)
        })
        .await
        .ok_or_else(|| ApiError::not_found(format!("Work item {} not found", id)))?;

    let project_key = project_key(&state, work_item.project_id).await?;

    log::info!(
        "Updated work item {} via REST API ({} change(s), version {})",
        work_item.display_key(&project_key),
        changes.len(),
        work_item.version
    );

    Ok(Json(WorkItemUpdateResponse {
        work_item: WorkItemDto::from_work_item(work_item, &project_key),
        changes,
    }))
}

/// PATCH /api/v1/work-items/{id}/preview
///
/// Dry run: report what the PATCH would change and which supplied fields
/// would be rejected. Nothing is stored.
pub async fn preview_work_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    PatchWithErrors(resolution): PatchWithErrors<UpdateWorkItemRequest>,
) -> ApiResult<Json<WorkItemPreviewResponse>> {
    let work_item_id = Uuid::parse_str(&id)?;

    let mut work_item = state
        .store
        .find_work_item(work_item_id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Work item {} not found", id)))?;

    let (patch, errors) = resolution.into_parts();
    let changes = apply_work_item_patch(&mut work_item, &patch, &errors);
    let project_key = project_key(&state, work_item.project_id).await?;

    Ok(Json(WorkItemPreviewResponse {
        valid: errors.is_empty(),
        work_item: WorkItemDto::from_work_item(work_item, &project_key),
        changes,
        errors,
    }))
}

// =============================================================================
// Helpers
// =============================================================================

async fn project_key(state: &AppState, project_id: Uuid) -> ApiResult<String> {
    state
        .store
        .find_project(project_id)
        .await
        .map(|project| project.key)
        .ok_or_else(|| ApiError::Internal {
            message: "Project not found for work item".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
