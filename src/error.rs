//! Error definitions shared across the crate.

use thiserror::Error;

/// Errors that can occur while configuring or resolving loggers.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The ambient service was explicitly cleared and nothing replaced it.
    #[error("no logger service is installed; assign one with ambient::set_current before retrieving it")]
    AmbientUnset,

    /// A logger was requested with an empty or blank name.
    #[error("logger name must not be empty")]
    InvalidLoggerName,

    /// A level name did not match any known level.
    #[error("unknown log level: {0}")]
    UnknownLevel(String),

    /// Reading a config file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A config file was not valid TOML for the expected schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for logging operations.
pub type LoggingResult<T> = Result<T, LoggingError>;
