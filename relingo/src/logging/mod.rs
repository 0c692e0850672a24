//! Structured logging infrastructure for Relingo.
//!
//! This module provides a configurable logging system based on the tracing
//! crate, supporting different output formats, log levels, and optional file
//! output.

#[cfg(test)]
mod tests;

use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::NonBlocking;

/// Error type for logging operations
#[derive(Debug)]
pub enum LogError {
    /// IO error occurred
    IoError(std::io::Error),

    /// Error parsing log level
    InvalidLogLevel(String),

    /// Error in subscriber setup
    SubscriberError(Box<dyn std::error::Error + Send + Sync>),

    /// General error
    Other(String),
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::IoError(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for LogError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        LogError::SubscriberError(err)
    }
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Initialize the logging system with the given configuration.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = level_for(config.level);

    let result = match config.format {
        LogFormat::Json => init_json_logging(level, config),
        LogFormat::Compact => init_compact_logging(level, config),
        _ => init_pretty_logging(level, config),
    };

    // If the error is "already set", ignore it
    if let Err(LogError::SubscriberError(ref e)) = result
        && e.to_string().contains("SetGlobalDefaultError")
    {
        return Ok(());
    }

    result
}

/// Initialize logging with JSON formatting
fn init_json_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_level(true)
        .with_target(true)
        .with_line_number(true);

    if let Some(file_path) = &config.file {
        let writer = create_non_blocking_file(file_path)?;
        subscriber.with_writer(writer).try_init()?;
    } else if config.stdout {
        subscriber.try_init()?;
    }

    Ok(())
}

/// Initialize logging with compact formatting
fn init_compact_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_level(true)
        .with_target(true)
        .with_line_number(true);

    if let Some(file_path) = &config.file {
        let writer = create_non_blocking_file(file_path)?;
        subscriber.with_writer(writer).try_init()?;
    } else if config.stdout {
        subscriber.try_init()?;
    }

    Ok(())
}

/// Initialize logging with pretty formatting
fn init_pretty_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(level)
        .with_level(true)
        .with_target(true)
        .with_line_number(true);

    if let Some(file_path) = &config.file {
        let writer = create_non_blocking_file(file_path)?;
        subscriber.with_writer(writer).try_init()?;
    } else if config.stdout {
        subscriber.try_init()?;
    }

    Ok(())
}

/// Create a non-blocking file writer.
///
/// The worker guard is intentionally leaked: the writer must stay alive for
/// the remainder of the process.
fn create_non_blocking_file(path: impl AsRef<Path>) -> Result<NonBlocking> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = tracing_appender::rolling::never(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_name().unwrap_or_default(),
    );

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    std::mem::forget(guard);

    Ok(non_blocking)
}

/// Convert a config LogLevel to a tracing Level.
pub fn level_for(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Parse a log level string into a LogLevel enum.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level
        .parse::<LogLevel>()
        .map_err(|_| LogError::InvalidLogLevel(level.to_string()))
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::IoError(e) => write!(f, "IO error: {}", e),
            LogError::SubscriberError(e) => write!(f, "Subscriber error: {}", e),
            LogError::InvalidLogLevel(s) => write!(f, "Invalid log level: {}", s),
            LogError::Other(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for LogError {}
