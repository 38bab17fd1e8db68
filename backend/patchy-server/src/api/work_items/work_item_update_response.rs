use crate::{FieldChange, WorkItemDto};

use serde::Serialize;

/// Work item after a PATCH, with the fields that actually changed
#[derive(Debug, Serialize)]
pub struct WorkItemUpdateResponse {
    pub work_item: WorkItemDto,
    pub changes: Vec<FieldChange>,
}
