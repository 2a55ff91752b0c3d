//! Logger services: threshold, registry and entry broadcast.
//!
//! # Data Flow
//! ```text
//! logger.log(level, message)
//!     → LogEntry stamped with UTC time and thread id
//!     → broadcast.rs (raw fan-out, unconditional)
//!     → Entries view (level >= threshold, evaluated per entry)
//!     → subscribers (callbacks or EntryReceiver channels)
//! ```
//!
//! # Implementations
//! - default.rs: the real service
//! - null.rs: do-nothing fallback used when no service is installed
//!
//! # Design Decisions
//! - The threshold lives in one atomic shared by the service and its loggers,
//!   so a change is seen by every handle without re-fetching
//! - Registry lookups never take a lock on the hot path
//! - Logger names for types are normalized by naming.rs

pub mod broadcast;
pub mod default;
pub mod naming;
pub mod null;

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::error::LoggingResult;
use crate::logger::SharedLogger;
use crate::model::LogLevel;

pub use broadcast::{Entries, EntryReceiver, Subscription};
pub use default::DefaultLoggerService;
pub use null::NullLoggerService;

/// Threshold storage shared between a service and the loggers it creates.
///
/// Last write wins; readers may briefly observe a stale value.
#[derive(Debug)]
pub(crate) struct Threshold(AtomicU8);

impl Threshold {
    pub(crate) fn new(level: LogLevel) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    pub(crate) fn get(&self) -> LogLevel {
        LogLevel::from(self.0.load(Ordering::Relaxed))
    }

    pub(crate) fn set(&self, level: LogLevel) {
        self.0.store(level as u8, Ordering::Relaxed);
    }

    pub(crate) fn allows(&self, level: LogLevel) -> bool {
        self.get() <= level
    }
}

/// Source of named loggers and of the stream of entries they produce.
pub trait LoggerService: Send + Sync {
    /// Minimum level that reaches subscribers.
    fn threshold(&self) -> LogLevel;

    /// Replace the threshold. Any level is accepted, including `None`.
    fn set_threshold(&self, level: LogLevel);

    /// Return true if entries at `level` currently reach subscribers.
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.threshold() <= level
    }

    fn is_verbose_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Verbose)
    }

    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    fn is_info_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    fn is_perf_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Perf)
    }

    fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Warn)
    }

    fn is_error_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    /// Live, threshold-filtered view of emitted entries.
    fn entries(&self) -> Entries;

    /// Get the logger registered under `name`, creating it if needed.
    fn logger(&self, name: &str) -> LoggingResult<SharedLogger>;
}

/// Shared handle to any service.
pub type SharedService = Arc<dyn LoggerService>;

/// Type-derived logger lookup, available on every service.
pub trait LoggerServiceExt {
    /// Get the logger named after `T`, ignoring its generic arguments.
    fn logger_for<T: ?Sized>(&self) -> LoggingResult<SharedLogger>;
}

impl<S: LoggerService + ?Sized> LoggerServiceExt for S {
    fn logger_for<T: ?Sized>(&self) -> LoggingResult<SharedLogger> {
        self.logger(&naming::logger_name_of::<T>())
    }
}
