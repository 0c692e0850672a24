use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::logging::{level_for, parse_log_level};
use std::sync::Once;

// Use this to ensure init is only called once across all tests
static INIT: Once = Once::new();

#[test]
fn test_init_console_logging() {
    INIT.call_once(|| {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            format: LogFormat::Compact,
            file: None,
            stdout: true,
        };

        // This should not fail
        assert!(crate::logging::init(&config).is_ok());
    });
}

#[test]
fn test_level_conversion() {
    assert!(parse_log_level("trace").is_ok());
    assert!(parse_log_level("debug").is_ok());
    assert!(parse_log_level("info").is_ok());
    assert!(parse_log_level("warn").is_ok());
    assert!(parse_log_level("error").is_ok());
    assert!(parse_log_level("invalid").is_err());

    assert_eq!(level_for(LogLevel::Trace), tracing::Level::TRACE);
    assert_eq!(level_for(LogLevel::Error), tracing::Level::ERROR);
}
