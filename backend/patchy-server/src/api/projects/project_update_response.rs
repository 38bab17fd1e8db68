use crate::{FieldChange, ProjectDto};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectUpdateResponse {
    pub project: ProjectDto,
    pub changes: Vec<FieldChange>,
}
