//! Per-level convenience calls.
//!
//! Every helper checks the level first, so nothing is formatted for a level
//! that would be dropped. The `log_*!` macros build on the same calls and
//! take `format!`-style arguments, optionally preceded by `err: <error>` to
//! append an error and its causes to the message.
//!
//! ```
//! use ambient_log::{log_info, log_warn, DefaultLoggerService, LoggerService};
//!
//! let service = DefaultLoggerService::new();
//! let logger = service.logger("app::sync").unwrap();
//!
//! log_info!(logger, "synced {} files", 12);
//! let err = std::io::Error::other("disk full");
//! log_warn!(logger, err: err, "could not write {}", "index.db");
//!
//! {
//!     let _timer = logger.perf("rebuild index");
//!     // timed work
//! }
//! ```

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::logger::{Logger, PerformanceBlock};
use crate::model::LogLevel;

/// Render an error followed by its `source()` chain, separated by `": "`.
pub fn render_error<E: Error + ?Sized>(error: &E) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

impl dyn Logger {
    /// Log `message` at `level` if that level is enabled.
    pub fn log_enabled(&self, level: LogLevel, message: &str) {
        if self.is_enabled(level) {
            self.log(level, message);
        }
    }

    /// Format and log at `level`, only if that level is enabled.
    pub fn log_args(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.log(level, &args.to_string());
        }
    }

    /// Format, append `error` with its causes, and log at `level` if enabled.
    pub fn log_with_error<E: Error + ?Sized>(
        &self,
        level: LogLevel,
        error: &E,
        args: fmt::Arguments<'_>,
    ) {
        if self.is_enabled(level) {
            self.log(level, &format!("{}: {}", args, render_error(error)));
        }
    }

    pub fn verbose(&self, message: &str) {
        self.log_enabled(LogLevel::Verbose, message);
    }

    pub fn debug(&self, message: &str) {
        self.log_enabled(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log_enabled(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log_enabled(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log_enabled(LogLevel::Error, message);
    }

    /// Start a timed block, or an empty one when `Perf` is disabled.
    ///
    /// The block keeps its own clone of the handle.
    pub fn perf(self: &Arc<Self>, message: &str) -> PerformanceBlock {
        if self.is_perf_enabled() {
            PerformanceBlock::new(Arc::clone(self), message)
        } else {
            PerformanceBlock::empty()
        }
    }

    /// Like [`perf`](Self::perf), formatting the message only when enabled.
    pub fn perf_args(self: &Arc<Self>, args: fmt::Arguments<'_>) -> PerformanceBlock {
        if self.is_perf_enabled() {
            PerformanceBlock::new(Arc::clone(self), args.to_string())
        } else {
            PerformanceBlock::empty()
        }
    }
}

/// Log at an explicit level with `format!` arguments.
///
/// `log_at!(logger, level, "fmt", args..)` or
/// `log_at!(logger, level, err: error, "fmt", args..)`.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, err: $err:expr, $($arg:tt)+) => {
        $logger.log_with_error($level, &$err, ::std::format_args!($($arg)+))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_args($level, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Verbose, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Start a timed block with a `format!` message. Evaluates to a
/// [`PerformanceBlock`](crate::PerformanceBlock) that logs when dropped.
#[macro_export]
macro_rules! log_perf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.perf_args(::std::format_args!($($arg)+))
    };
}
