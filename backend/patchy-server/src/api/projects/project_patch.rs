use crate::models::project::Project;
use crate::{FieldChange, FieldChangeBuilder, UpdateProjectRequest, sanitize_string};

use patchy_core::Patched;

/// Copy every supplied field of `patch` onto `project` and return what changed.
pub fn apply_project_patch(
    project: &mut Project,
    patch: &Patched<UpdateProjectRequest>,
) -> Vec<FieldChange> {
    let mut changes = FieldChangeBuilder::new();

    if let Some(Some(key)) = patch.supplied("key", |r| r.key.as_deref()) {
        changes.track("key", project.key.as_str(), key);
        project.key = key.to_string();
    }

    if let Some(Some(title)) = patch.supplied("title", |r| r.title.as_deref()) {
        let title = sanitize_string(title);
        changes.track("title", project.title.as_str(), title.as_str());
        project.title = title;
    }

    if let Some(description) = patch.supplied("description", |r| r.description.as_deref()) {
        let description = description.map(sanitize_string);
        changes.track_option("description", &project.description, &description);
        project.description = description;
    }

    if let Some(Some(status)) = patch.supplied("status", |r| r.status.as_deref()) {
        changes.track("status", project.status.as_str(), status);
        project.status = status.to_string();
    }

    project.touch(!changes.is_empty());

    changes.build()
}
