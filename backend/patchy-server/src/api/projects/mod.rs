pub mod create_project_request;
pub mod project_dto;
pub mod project_patch;
pub mod project_response;
pub mod project_rules;
pub mod project_update_response;
pub mod projects;
pub mod update_project_request;
