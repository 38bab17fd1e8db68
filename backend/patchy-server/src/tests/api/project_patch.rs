use crate::models::project::Project;
use crate::tests::api::test_state;
use crate::{UpdateProjectRequest, apply_project_patch};

use patchy_core::{ResolveError, ValidationError};

use googletest::assert_that;
use googletest::prelude::eq;

fn project() -> Project {
    Project::new("PATCH".into(), "Original".into(), Some("Keep me".into()))
}

#[test]
fn given_whitespace_only_title_when_resolved_then_rejected_before_apply() {
    // Given
    let state = test_state();

    // When
    let result = state
        .resolver
        .resolve::<UpdateProjectRequest>(br#"{"title": "   "}"#);

    // Then
    let errors = match result {
        Err(ResolveError::Rejected { errors }) => errors,
        other => panic!("expected rejection, got {:?}", other),
    };
    assert_that!(errors.len(), eq(1));
    let only: Vec<&ValidationError> = errors.field_errors("title").collect();
    assert_eq!(only[0].code, "length");
}

#[test]
fn given_padded_title_when_resolved_and_applied_then_stored_trimmed() {
    // Given
    let state = test_state();
    let mut project = project();
    let patch = state
        .resolver
        .resolve::<UpdateProjectRequest>(br#"{"title": "  Renamed  "}"#)
        .unwrap()
        .into_target();

    // When
    let changes = apply_project_patch(&mut project, &patch);

    // Then
    assert_eq!(project.title, "Renamed");
    assert_eq!(project.description.as_deref(), Some("Keep me"));
    assert_that!(changes.len(), eq(1));
    assert_that!(project.version, eq(2));
}

#[test]
fn given_patch_repeating_current_values_when_applied_then_version_unchanged() {
    let state = test_state();
    let mut project = project();
    let before = project.updated_at;
    let patch = state
        .resolver
        .resolve::<UpdateProjectRequest>(br#"{"key": "PATCH", "status": "active"}"#)
        .unwrap()
        .into_target();

    let changes = apply_project_patch(&mut project, &patch);

    assert!(changes.is_empty());
    assert_that!(project.version, eq(1));
    assert_eq!(project.updated_at, before);
}

#[test]
fn given_unchanged_project_when_touched_then_version_kept() {
    let mut project = project();

    project.touch(false);
    assert_that!(project.version, eq(1));

    project.touch(true);
    assert_that!(project.version, eq(2));
}
