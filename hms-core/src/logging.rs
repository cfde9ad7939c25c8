//! Logging configuration with rotation support
//!
//! Logs go to a daily-rotated file and, optionally, warnings to stderr. Stdout
//! is left alone because it carries the console menus.
//!
//! # Example
//!
//! ```rust,no_run
//! use hms_core::config::LogConfig;
//! use hms_core::logging::init_logging;
//!
//! init_logging(&LogConfig::default()).unwrap();
//! ```

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogConfig;
use crate::error::{Error, Result};

/// Initialize the global subscriber from `config`.
///
/// `RUST_LOG` overrides `config.level` when set. Fails if the log directory
/// cannot be created or a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    // Daily rotation
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&config.file_prefix)
        .build(&config.directory)
        .map_err(|e| Error::Internal(format!("Failed to create log appender: {}", e)))?;

    // File: JSON for parsing or full text
    let file_layer = if config.json {
        fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_ansi(false)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .boxed()
    };

    // Stderr: warnings only, so prompts are not buried
    let stderr_layer = config.stderr.then(|| {
        fmt::layer()
            .with_target(false)
            .compact()
            .with_writer(std::io::stderr)
            .with_filter(LevelFilter::WARN)
    });

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| Error::Internal(format!("Failed to init tracing: {}", e)))?;

    Ok(())
}
