use serde::Deserialize;

/// Request body for creating a project
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}
