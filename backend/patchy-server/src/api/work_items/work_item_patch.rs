//! Applies a resolved work item patch to a stored work item

use crate::models::work_item::WorkItem;
use crate::{FieldChange, FieldChangeBuilder, UpdateWorkItemRequest};

use patchy_core::{ErrorRecord, FieldPresence, Patched};

/// Copy every supplied field of `patch` onto `item` and return what changed.
///
/// Fields named in `rejected` are skipped, so a preview with errors still
/// shows the valid part of the update. Omitted fields are never touched;
/// a supplied `null` clears a nullable field.
pub fn apply_work_item_patch(
    item: &mut WorkItem,
    patch: &Patched<UpdateWorkItemRequest>,
    rejected: &ErrorRecord,
) -> Vec<FieldChange> {
    let applies = |field: &str| patch.was_supplied(field) && !rejected.has_field_error(field);
    let mut changes = FieldChangeBuilder::new();

    if applies("title")
        && let Some(title) = patch.title.as_deref()
    {
        let title = sanitize_string(title);
        changes.track("title", item.title.as_str(), title.as_str());
        item.title = title;
    }

    if applies("description") {
        let description = patch.description.as_deref().map(sanitize_string);
        changes.track_option("description", &item.description, &description);
        item.description = description;
    }

    if applies("status")
        && let Some(status) = &patch.status
    {
        changes.track("status", item.status.as_str(), status.as_str());
        item.status = status.clone();
    }

    if applies("priority")
        && let Some(priority) = &patch.priority
    {
        changes.track("priority", item.priority.as_str(), priority.as_str());
        item.priority = priority.clone();
    }

    if applies("story_points") {
        changes.track_option("story_points", &item.story_points, &patch.story_points);
        item.story_points = patch.story_points;
    }

    if applies("assignee_id") {
        changes.track_option("assignee_id", &item.assignee_id, &patch.assignee_id);
        item.assignee_id = patch.assignee_id;
    }

    item.touch(!changes.is_empty());
    changes.build()
}

pub fn sanitize_string(s: &str) -> String {
    s.trim().to_string()
}
