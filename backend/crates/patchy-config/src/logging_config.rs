use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// ANSI colors on stdout; ignored when logging to a file
    pub colored: bool,
    /// Log file name inside `dir`. `None` logs to stdout.
    pub file: Option<String>,
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: true,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(file) = &self.file {
            if file.trim().is_empty() {
                return Err(ConfigError::logging("logging.file cannot be empty"));
            }

            let path = Path::new(file);
            if path.is_absolute() || file.contains("..") {
                return Err(ConfigError::logging(
                    "logging.file must be relative and cannot contain '..'",
                ));
            }
        }

        Ok(())
    }

    /// Resolve the log file against `base`, if file logging is enabled.
    pub fn file_path(&self, base: &Path) -> Option<PathBuf> {
        self.file
            .as_ref()
            .map(|file| base.join(&self.dir).join(file))
    }
}
