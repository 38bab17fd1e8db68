use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const DEFAULT_STATUS: &str = "backlog";
pub const DEFAULT_PRIORITY: &str = "medium";

#[derive(Debug, Clone, PartialEq)]
pub struct WorkItem {
    pub id: Uuid,
    pub project_id: Uuid,
    pub item_number: i32,

    // Core fields
    pub title: String,
    pub description: Option<String>,

    // Workflow
    pub status: String,
    pub priority: String,
    pub story_points: Option<i32>,

    // Assignment
    pub assignee_id: Option<Uuid>,

    // Audit
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkItem {
    /// Display key such as `PROJ-42`
    pub fn display_key(&self, project_key: &str) -> String {
        format!("{}-{}", project_key, self.item_number)
    }

    /// Record an applied change set: bumps the version when anything changed.
    pub fn touch(&mut self, changed: bool) {
        if changed {
            self.version += 1;
            self.updated_at = Utc::now();
        }
    }
}
