use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MIN_DESCRIPTION_LENGTH: usize = 0;
pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

pub const MIN_STORY_POINTS: i32 = 0;
pub const MAX_STORY_POINTS: i32 = 1000;
pub const DEFAULT_MAX_STORY_POINTS: i32 = 100;

pub const MIN_PROJECT_KEY_LENGTH: usize = 2;
pub const MAX_PROJECT_KEY_LENGTH: usize = 32;
pub const DEFAULT_MAX_PROJECT_KEY_LENGTH: usize = 10;

/// Field limits enforced by the server's patch rule sets.
///
/// A PATCH that supplies a value outside these limits is rejected with a
/// field error. Omitted fields are never checked against them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for work item titles
    pub max_title_length: usize,
    /// Maximum length for work item descriptions
    pub max_description_length: usize,
    /// Maximum story points allowed
    pub max_story_points: i32,
    /// Maximum length for project keys
    pub max_project_key_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_story_points: DEFAULT_MAX_STORY_POINTS,
            max_project_key_length: DEFAULT_MAX_PROJECT_KEY_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_description_length < MIN_DESCRIPTION_LENGTH
            || self.max_description_length > MAX_DESCRIPTION_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.max_description_length must be {}-{}, got {}",
                MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        if self.max_story_points < MIN_STORY_POINTS || self.max_story_points > MAX_STORY_POINTS {
            return Err(ConfigError::validation(format!(
                "validation.max_story_points must be {}-{}, got {}",
                MIN_STORY_POINTS, MAX_STORY_POINTS, self.max_story_points
            )));
        }

        if self.max_project_key_length < MIN_PROJECT_KEY_LENGTH
            || self.max_project_key_length > MAX_PROJECT_KEY_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.max_project_key_length must be {}-{}, got {}",
                MIN_PROJECT_KEY_LENGTH, MAX_PROJECT_KEY_LENGTH, self.max_project_key_length
            )));
        }

        Ok(())
    }
}
