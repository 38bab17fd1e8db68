use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    LoggingConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PATCHY_CONFIG_DIR env var, else use ./.patchy/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PATCHY_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PATCHY_CONFIG_DIR env var > ./.patchy/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.logging.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Get absolute path to the log file, if file logging is enabled.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let config_dir = Self::config_dir()?;
        Ok(self.logging.file_path(&config_dir))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max body {} bytes)",
            self.server.host, self.server.port, self.server.max_body_bytes
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        info!(
            "  validation: title={}, desc={}, points={}, key={}",
            self.validation.max_title_length,
            self.validation.max_description_length,
            self.validation.max_story_points,
            self.validation.max_project_key_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PATCHY_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PATCHY_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "PATCHY_SERVER_MAX_BODY_BYTES",
            &mut self.server.max_body_bytes,
        );

        // Logging
        Self::apply_env_parse("PATCHY_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PATCHY_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PATCHY_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("PATCHY_LOG_DIR", &mut self.logging.dir);

        // Validation
        Self::apply_env_parse(
            "PATCHY_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "PATCHY_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );
        Self::apply_env_parse(
            "PATCHY_VALIDATION_MAX_STORY_POINTS",
            &mut self.validation.max_story_points,
        );
        Self::apply_env_parse(
            "PATCHY_VALIDATION_MAX_PROJECT_KEY_LENGTH",
            &mut self.validation.max_project_key_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
