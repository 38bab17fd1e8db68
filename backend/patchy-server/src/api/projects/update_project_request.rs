use crate::ProjectRules;

use patchy_config::ValidationConfig;
use patchy_core::PatchSchema;

use validator::Validate;

/// Partial update for a project.
///
/// Static rules are declared with `validator`; limits that come from
/// configuration live in [`ProjectRules`].
#[derive(Debug, Clone, Default, PartialEq, Validate)]
#[validate(schema(
    function = "validate_title_differs_from_description",
    skip_on_field_errors = false
))]
pub struct UpdateProjectRequest {
    #[validate(required(message = "key cannot be null"))]
    pub key: Option<String>,

    #[validate(required(message = "title cannot be null"))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(required(message = "status cannot be null"))]
    pub status: Option<String>,
}

impl UpdateProjectRequest {
    pub fn patch_schema(limits: &ValidationConfig) -> PatchSchema<Self> {
        PatchSchema::new()
            .field("key", |r: &mut Self, v| r.key = v)
            .field("title", |r: &mut Self, v| r.title = v)
            .field("description", |r: &mut Self, v| r.description = v)
            .field("status", |r: &mut Self, v| r.status = v)
            .rules(ProjectRules::new(limits))
    }
}

fn validate_title_differs_from_description(
    request: &UpdateProjectRequest,
) -> Result<(), validator::ValidationError> {
    if let (Some(title), Some(description)) = (&request.title, &request.description)
        && title.trim().eq_ignore_ascii_case(description.trim())
    {
        let mut error = validator::ValidationError::new("description_repeats_title");
        error.message = Some("description must not repeat the title".into());
        return Err(error);
    }

    Ok(())
}
