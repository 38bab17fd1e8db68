pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod models;
pub mod routes;
pub mod store;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::patch::{Patch, PatchWithErrors},
    field_change::FieldChange,
    field_change_builder::FieldChangeBuilder,
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        project_patch::apply_project_patch,
        project_response::ProjectResponse,
        project_rules::ProjectRules,
        project_update_response::ProjectUpdateResponse,
        projects::{create_project, get_project, update_project},
        update_project_request::UpdateProjectRequest,
    },
    work_items::{
        create_work_item_request::CreateWorkItemRequest,
        update_work_item_request::UpdateWorkItemRequest,
        work_item_dto::WorkItemDto,
        work_item_patch::{apply_work_item_patch, sanitize_string},
        work_item_preview_response::WorkItemPreviewResponse,
        work_item_response::WorkItemResponse,
        work_item_rules::WorkItemRules,
        work_item_update_response::WorkItemUpdateResponse,
        work_items::{create_work_item, get_work_item, preview_work_item, update_work_item},
    },
};
pub use app_state::{AppState, build_schema_registry};

pub use crate::routes::build_router;
