use crate::{FieldChange, WorkItemDto};

use patchy_core::ErrorRecord;

use serde::Serialize;

/// Dry-run result: the would-be work item and every remaining error
#[derive(Debug, Serialize)]
pub struct WorkItemPreviewResponse {
    pub valid: bool,
    pub work_item: WorkItemDto,
    pub changes: Vec<FieldChange>,
    pub errors: ErrorRecord,
}
