use crate::{UpdateWorkItemRequest, WorkItemRules};

use patchy_config::ValidationConfig;
use patchy_core::RuleSet;

use googletest::assert_that;
use googletest::prelude::eq;

fn rules() -> WorkItemRules {
    WorkItemRules::new(&ValidationConfig::default())
}

fn valid_request() -> UpdateWorkItemRequest {
    UpdateWorkItemRequest {
        title: Some("Fix login".into()),
        description: Some("Users cannot log in".into()),
        status: Some("todo".into()),
        priority: Some("high".into()),
        story_points: Some(3),
        assignee_id: None,
    }
}

#[test]
fn given_complete_valid_request_when_checked_then_no_errors() {
    assert!(rules().check(&valid_request()).is_empty());
}

#[test]
fn given_default_request_when_checked_then_required_fields_reported() {
    // Given
    let request = UpdateWorkItemRequest::default();

    // When
    let errors = rules().check(&request);

    // Then
    let fields: Vec<_> = errors.iter().filter_map(|e| e.field.as_deref()).collect();
    assert_eq!(fields, vec!["title", "status", "priority"]);
    assert!(errors.iter().all(|e| e.code == "required"));
}

#[test]
fn given_blank_title_when_checked_then_length_error() {
    let request = UpdateWorkItemRequest {
        title: Some("   ".into()),
        ..valid_request()
    };

    let errors = rules().check(&request);

    assert_that!(errors.len(), eq(1));
    assert_eq!(errors[0].code, "length");
}

#[test]
fn given_title_over_configured_limit_when_checked_then_error() {
    let limits = ValidationConfig {
        max_title_length: 5,
        ..Default::default()
    };
    let request = UpdateWorkItemRequest {
        title: Some("Too long".into()),
        ..valid_request()
    };

    let errors = WorkItemRules::new(&limits).check(&request);

    assert_that!(errors.len(), eq(1));
    assert!(errors[0].message.contains("5"));
}

#[test]
fn given_unknown_status_when_checked_then_invalid_choice() {
    let request = UpdateWorkItemRequest {
        status: Some("finished".into()),
        ..valid_request()
    };

    let errors = rules().check(&request);

    assert_that!(errors.len(), eq(1));
    assert_eq!(errors[0].field.as_deref(), Some("status"));
    assert_eq!(errors[0].code, "invalid_choice");
}

#[test]
fn given_story_points_out_of_range_when_checked_then_range_error() {
    for points in [-1, 101] {
        let request = UpdateWorkItemRequest {
            story_points: Some(points),
            ..valid_request()
        };

        let errors = rules().check(&request);

        assert_that!(errors.len(), eq(1));
        assert_eq!(errors[0].code, "range");
    }
}

#[test]
fn given_null_nullable_fields_when_checked_then_no_errors() {
    let request = UpdateWorkItemRequest {
        description: None,
        story_points: None,
        assignee_id: None,
        ..valid_request()
    };

    assert!(rules().check(&request).is_empty());
}
