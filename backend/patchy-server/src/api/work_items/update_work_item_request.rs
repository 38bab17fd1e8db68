use crate::WorkItemRules;

use patchy_config::ValidationConfig;
use patchy_core::PatchSchema;

use uuid::Uuid;

/// Partial update for a work item.
///
/// Every field starts as `None`. Whether a `None` means "clear it" or "leave
/// it alone" is answered by the presence map, not by this struct.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateWorkItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub story_points: Option<i32>,
    pub assignee_id: Option<Uuid>,
}

impl UpdateWorkItemRequest {
    pub fn patch_schema(limits: &ValidationConfig) -> PatchSchema<Self> {
        PatchSchema::new()
            .field("title", |r: &mut Self, v| r.title = v)
            .field("description", |r: &mut Self, v| r.description = v)
            .field("status", |r: &mut Self, v| r.status = v)
            .field("priority", |r: &mut Self, v| r.priority = v)
            .field("story_points", |r: &mut Self, v| r.story_points = v)
            .field("assignee_id", |r: &mut Self, v| r.assignee_id = v)
            .rules(WorkItemRules::new(limits))
    }
}
