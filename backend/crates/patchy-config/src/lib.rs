mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "PATCHY_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".patchy";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
const MIN_MAX_BODY_BYTES: usize = 64;
const MAX_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
