use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const DEFAULT_PROJECT_STATUS: &str = "active";

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub key: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    /// Last item number handed out; work items are numbered from 1
    pub last_item_number: i32,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(key: String, title: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            key,
            title,
            description,
            status: DEFAULT_PROJECT_STATUS.to_string(),
            last_item_number: 0,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record an applied change set: bumps the version when anything changed.
    pub fn touch(&mut self, changed: bool) {
        if changed {
            self.version += 1;
            self.updated_at = Utc::now();
        }
    }
}
