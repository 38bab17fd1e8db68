use crate::models::work_item::WorkItem;
use crate::{UpdateWorkItemRequest, apply_work_item_patch};

use patchy_core::{ErrorRecord, Patched, PresenceMap, ValidationError};

use chrono::Utc;
use serde_json::{Value, json};
use uuid::Uuid;

fn work_item() -> WorkItem {
    let now = Utc::now();
    WorkItem {
        id: Uuid::new_v4(),
        project_id: Uuid::new_v4(),
        item_number: 7,
        title: "Original".into(),
        description: Some("Keep me".into()),
        status: "todo".into(),
        priority: "medium".into(),
        story_points: Some(5),
        assignee_id: None,
        version: 1,
        created_at: now,
        updated_at: now,
    }
}

fn patched(request: UpdateWorkItemRequest, payload: Value) -> Patched<UpdateWorkItemRequest> {
    let Value::Object(map) = payload else {
        panic!("payload must be an object");
    };
    Patched::new(request, PresenceMap::new(map))
}

#[test]
fn given_only_title_supplied_when_applied_then_other_fields_untouched() {
    // Given
    let mut item = work_item();
    let patch = patched(
        UpdateWorkItemRequest {
            title: Some(" Renamed ".into()),
            ..Default::default()
        },
        json!({"title": " Renamed "}),
    );

    // When
    let changes = apply_work_item_patch(&mut item, &patch, &ErrorRecord::new());

    // Then
    assert_eq!(item.title, "Renamed");
    assert_eq!(item.description.as_deref(), Some("Keep me"));
    assert_eq!(item.story_points, Some(5));
    assert_eq!(item.version, 2);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].field_name, "title");
}

#[test]
fn given_null_supplied_for_nullable_field_when_applied_then_cleared() {
    let mut item = work_item();
    let patch = patched(
        UpdateWorkItemRequest::default(),
        json!({"description": null, "story_points": null}),
    );

    let changes = apply_work_item_patch(&mut item, &patch, &ErrorRecord::new());

    assert_eq!(item.description, None);
    assert_eq!(item.story_points, None);
    assert_eq!(changes.len(), 2);
}

#[test]
fn given_same_values_when_applied_then_no_changes_and_version_kept() {
    let mut item = work_item();
    let patch = patched(
        UpdateWorkItemRequest {
            status: Some("todo".into()),
            ..Default::default()
        },
        json!({"status": "todo"}),
    );

    let changes = apply_work_item_patch(&mut item, &patch, &ErrorRecord::new());

    assert!(changes.is_empty());
    assert_eq!(item.version, 1);
}

#[test]
fn given_rejected_field_when_applied_then_field_skipped() {
    let mut item = work_item();
    let patch = patched(
        UpdateWorkItemRequest {
            priority: Some("high".into()),
            ..Default::default()
        },
        json!({"priority": "high", "story_points": "many"}),
    );
    let rejected: ErrorRecord = [ValidationError::binding("story_points", "Invalid value")]
        .into_iter()
        .collect();

    let changes = apply_work_item_patch(&mut item, &patch, &rejected);

    assert_eq!(item.story_points, Some(5));
    assert_eq!(item.priority, "high");
    assert_eq!(changes.len(), 1);
}
