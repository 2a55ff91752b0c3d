//! Do-nothing service used when no real service is installed.

use std::sync::{Arc, LazyLock};

use crate::error::LoggingResult;
use crate::logger::{Logger, SharedLogger};
use crate::model::LogLevel;
use crate::service::broadcast::Entries;
use crate::service::{LoggerService, SharedService};

static NULL_LOGGER: LazyLock<SharedLogger> = LazyLock::new(|| Arc::new(NullLogger));

static NULL_SERVICE: LazyLock<SharedService> = LazyLock::new(|| Arc::new(NullLoggerService));

/// Shared instance of the null service.
pub fn null_service() -> SharedService {
    NULL_SERVICE.clone()
}

/// A service that swallows everything.
///
/// The threshold always reads `None`, every level reports disabled, the entry
/// stream never emits, and every name resolves to one shared logger that
/// drops what it is given. Invalid names are swallowed too.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLoggerService;

impl LoggerService for NullLoggerService {
    fn threshold(&self) -> LogLevel {
        LogLevel::None
    }

    fn set_threshold(&self, _level: LogLevel) {}

    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn entries(&self) -> Entries {
        Entries::never()
    }

    fn logger(&self, _name: &str) -> LoggingResult<SharedLogger> {
        Ok(NULL_LOGGER.clone())
    }
}

/// Logger handed out by [`NullLoggerService`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn name(&self) -> &str {
        "null"
    }

    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn log(&self, _level: LogLevel, _message: &str) {
        // intentionally do nothing
    }
}
