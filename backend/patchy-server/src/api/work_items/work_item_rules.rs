//! Config-driven rules for work item updates
//!
//! The rules judge the bound target as if it were a complete object; a
//! `None` title is reported as missing. The resolver drops that report when
//! the client never sent `title`.

use crate::UpdateWorkItemRequest;

use patchy_config::ValidationConfig;
use patchy_core::{RuleSet, ValidationError};

pub const VALID_STATUSES: [&str; 6] = [
    "backlog",
    "todo",
    "in_progress",
    "review",
    "done",
    "blocked",
];
pub const VALID_PRIORITIES: [&str; 4] = ["low", "medium", "high", "critical"];

#[derive(Debug, Clone)]
pub struct WorkItemRules {
    max_title_length: usize,
    max_description_length: usize,
    max_story_points: i32,
}

impl WorkItemRules {
    pub fn new(limits: &ValidationConfig) -> Self {
        Self {
            max_title_length: limits.max_title_length,
            max_description_length: limits.max_description_length,
            max_story_points: limits.max_story_points,
        }
    }

    fn check_title(&self, title: Option<&str>, errors: &mut Vec<ValidationError>) {
        let Some(title) = title else {
            errors.push(ValidationError::field("title", "required", "title cannot be null"));
            return;
        };

        let length = title.trim().chars().count();
        if length == 0 {
            errors.push(ValidationError::field(
                "title",
                "length",
                "title must be at least 1 character",
            ));
        } else if length > self.max_title_length {
            errors.push(ValidationError::field(
                "title",
                "length",
                format!("title must not exceed {} characters", self.max_title_length),
            ));
        }
    }

    fn check_description(&self, description: Option<&str>, errors: &mut Vec<ValidationError>) {
        if let Some(description) = description
            && description.chars().count() > self.max_description_length
        {
            errors.push(ValidationError::field(
                "description",
                "length",
                format!(
                    "description exceeds maximum length ({})",
                    self.max_description_length
                ),
            ));
        }
    }

    fn check_story_points(&self, points: Option<i32>, errors: &mut Vec<ValidationError>) {
        if let Some(points) = points
            && !(0..=self.max_story_points).contains(&points)
        {
            errors.push(ValidationError::field(
                "story_points",
                "range",
                format!("story_points must be 0-{}", self.max_story_points),
            ));
        }
    }
}

/// Required choice field: `None` is an error, so is anything outside `valid`.
fn check_choice(
    field: &'static str,
    value: Option<&str>,
    valid: &[&str],
    errors: &mut Vec<ValidationError>,
) {
    match value {
        None => errors.push(ValidationError::field(
            field,
            "required",
            format!("{} cannot be null", field),
        )),
        Some(value) if !valid.contains(&value) => errors.push(ValidationError::field(
            field,
            "invalid_choice",
            format!("Invalid {}: {}. Valid: {}", field, value, valid.join(", ")),
        )),
        Some(_) => {}
    }
}

impl RuleSet<UpdateWorkItemRequest> for WorkItemRules {
    fn check(&self, target: &UpdateWorkItemRequest) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        self.check_title(target.title.as_deref(), &mut errors);
        self.check_description(target.description.as_deref(), &mut errors);
        check_choice("status", target.status.as_deref(), &VALID_STATUSES, &mut errors);
        check_choice(
            "priority",
            target.priority.as_deref(),
            &VALID_PRIORITIES,
            &mut errors,
        );
        self.check_story_points(target.story_points, &mut errors);

        errors
    }
}
