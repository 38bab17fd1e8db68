use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{Record, info};

/// Install the global fern logger.
///
/// Output goes to `log_file` when set, otherwise to stdout. Colors apply to
/// stdout only.
pub fn initialize(
    log_level: patchy_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let (sink, colors): (Output, Option<ColoredLevelConfig>) = match &log_file {
        Some(log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| ServerError::LogFile {
                    path: log_path.clone(),
                    source: e,
                })?;
            (file.into(), None)
        }
        None => (std::io::stdout().into(), colored.then(level_colors)),
    };

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| match &colors {
            Some(colors) => write_line(out, message, record, colors.color(record.level())),
            None => write_line(out, message, record, record.level()),
        })
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match &log_file {
        Some(path) => info!(
            "Logger initialized: level={}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={}, stdout", level_filter),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[<rfc3339> - <level>] <message> [<file>:<line>]`
fn write_line(
    out: FormatCallback,
    message: &fmt::Arguments,
    record: &Record,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}
