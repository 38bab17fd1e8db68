use crate::{ProjectRules, UpdateProjectRequest};

use patchy_config::ValidationConfig;
use patchy_core::RuleSet;

use googletest::assert_that;
use googletest::prelude::eq;

fn rules() -> ProjectRules {
    ProjectRules::new(&ValidationConfig::default())
}

fn valid_request() -> UpdateProjectRequest {
    UpdateProjectRequest {
        key: Some("PATCH".into()),
        title: Some("Patch service".into()),
        description: Some("Partial updates done right".into()),
        status: Some("active".into()),
    }
}

#[test]
fn given_complete_valid_request_when_checked_then_no_errors() {
    assert!(rules().check(&valid_request()).is_empty());
}

#[test]
fn given_default_request_when_checked_then_required_fields_reported() {
    let errors = rules().check(&UpdateProjectRequest::default());

    let mut fields: Vec<_> = errors.iter().filter_map(|e| e.field.as_deref()).collect();
    fields.sort_unstable();
    assert_eq!(fields, vec!["key", "status", "title"]);
}

#[test]
fn given_lowercase_key_when_checked_then_format_error() {
    let request = UpdateProjectRequest {
        key: Some("patch".into()),
        ..valid_request()
    };

    let errors = rules().check(&request);

    assert_that!(errors.len(), eq(1));
    assert_eq!(errors[0].code, "format");
}

#[test]
fn given_key_over_configured_limit_when_checked_then_length_error() {
    let limits = ValidationConfig {
        max_project_key_length: 4,
        ..Default::default()
    };

    let errors = ProjectRules::new(&limits).check(&valid_request());

    assert_that!(errors.len(), eq(1));
    assert_eq!(errors[0].field.as_deref(), Some("key"));
    assert_eq!(errors[0].code, "length");
}

#[test]
fn given_description_repeating_title_when_checked_then_global_error() {
    let request = UpdateProjectRequest {
        description: Some("patch SERVICE".into()),
        ..valid_request()
    };

    let errors = rules().check(&request);

    assert_that!(errors.len(), eq(1));
    assert!(errors[0].is_global());
    assert_eq!(errors[0].code, "description_repeats_title");
}

#[test]
fn given_unknown_status_when_checked_then_invalid_choice() {
    let request = UpdateProjectRequest {
        status: Some("deleted".into()),
        ..valid_request()
    };

    let errors = rules().check(&request);

    assert_that!(errors.len(), eq(1));
    assert_eq!(errors[0].code, "invalid_choice");
}

#[test]
fn given_whitespace_only_title_when_checked_then_length_error() {
    let request = UpdateProjectRequest {
        title: Some("   ".into()),
        ..valid_request()
    };

    let errors = rules().check(&request);

    assert_that!(errors.len(), eq(1));
    assert_eq!(errors[0].field.as_deref(), Some("title"));
    assert_eq!(errors[0].code, "length");
}

#[test]
fn given_raised_title_limit_when_long_title_checked_then_accepted() {
    let limits = ValidationConfig {
        max_title_length: 400,
        ..Default::default()
    };
    let request = UpdateProjectRequest {
        title: Some("t".repeat(300)),
        ..valid_request()
    };

    assert!(ProjectRules::new(&limits).check(&request).is_empty());
    assert_that!(RuleSet::check(&rules(), &request).len(), eq(1));
}

#[test]
fn given_lowered_description_limit_when_checked_then_length_error() {
    let limits = ValidationConfig {
        max_description_length: 10,
        ..Default::default()
    };

    let errors = ProjectRules::new(&limits).check(&valid_request());

    assert_that!(errors.len(), eq(1));
    assert_eq!(errors[0].field.as_deref(), Some("description"));
    assert_eq!(errors[0].code, "length");
}
