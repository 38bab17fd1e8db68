use crate::UpdateProjectRequest;

use patchy_config::ValidationConfig;
use patchy_core::{RuleSet, ValidationError, ValidatorRules};

pub const VALID_PROJECT_STATUSES: [&str; 2] = ["active", "archived"];
const MIN_KEY_LENGTH: usize = 2;

/// `validator` rules plus the configured length limits and the status choices.
#[derive(Debug, Clone)]
pub struct ProjectRules {
    max_key_length: usize,
    max_title_length: usize,
    max_description_length: usize,
}

impl ProjectRules {
    pub fn new(limits: &ValidationConfig) -> Self {
        Self {
            max_key_length: limits.max_project_key_length,
            max_title_length: limits.max_title_length,
            max_description_length: limits.max_description_length,
        }
    }

    /// Length of the title as stored, i.e. after trimming.
    fn check_title(&self, title: &str, errors: &mut Vec<ValidationError>) {
        let length = title.trim().chars().count();
        if length == 0 || length > self.max_title_length {
            errors.push(ValidationError::field(
                "title",
                "length",
                format!("title must be 1-{} characters", self.max_title_length),
            ));
        }
    }

    fn check_description(&self, description: &str, errors: &mut Vec<ValidationError>) {
        if description.chars().count() > self.max_description_length {
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

    fn check_key(&self, key: &str, errors: &mut Vec<ValidationError>) {
        let length = key.chars().count();
        if length < MIN_KEY_LENGTH || length > self.max_key_length {
            errors.push(ValidationError::field(
                "key",
                "length",
                format!(
                    "key must be {}-{} characters",
                    MIN_KEY_LENGTH, self.max_key_length
                ),
            ));
            return;
        }

        let starts_with_letter = key.chars().next().is_some_and(|c| c.is_ascii_uppercase());
        let all_allowed = key
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        if !starts_with_letter || !all_allowed {
            errors.push(ValidationError::field(
                "key",
                "format",
                "key must be uppercase letters and digits, starting with a letter",
            ));
        }
    }
}

impl RuleSet<UpdateProjectRequest> for ProjectRules {
    fn check(&self, target: &UpdateProjectRequest) -> Vec<ValidationError> {
        let mut errors = ValidatorRules.check(target);

        if let Some(title) = &target.title {
            self.check_title(title, &mut errors);
        }

        if let Some(description) = &target.description {
            self.check_description(description, &mut errors);
        }

        if let Some(key) = &target.key {
            self.check_key(key, &mut errors);
        }

        if let Some(status) = target.status.as_deref()
            && !VALID_PROJECT_STATUSES.contains(&status)
        {
            errors.push(ValidationError::field(
                "status",
                "invalid_choice",
                format!(
                    "Invalid status: {}. Valid: {}",
                    status,
                    VALID_PROJECT_STATUSES.join(", ")
                ),
            ));
        }

        errors
    }
}
