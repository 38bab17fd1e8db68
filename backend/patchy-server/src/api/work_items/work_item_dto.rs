use crate::models::work_item::WorkItem;

use serde::Serialize;

/// Work item DTO for JSON serialization
#[derive(Debug, Clone, Serialize)]
pub struct WorkItemDto {
    pub id: String,
    pub display_key: String,
    pub project_id: String,
    pub item_number: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub story_points: Option<i32>,
    pub assignee_id: Option<String>,
    pub version: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl WorkItemDto {
    pub fn from_work_item(w: WorkItem, project_key: &str) -> Self {
        Self {
            id: w.id.to_string(),
            display_key: w.display_key(project_key),
            project_id: w.project_id.to_string(),
            item_number: w.item_number,
            title: w.title,
            description: w.description,
            status: w.status,
            priority: w.priority,
            story_points: w.story_points,
            assignee_id: w.assignee_id.map(|id| id.to_string()),
            version: w.version,
            created_at: w.created_at.timestamp(),
            updated_at: w.updated_at.timestamp(),
        }
    }
}
