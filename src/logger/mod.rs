//! Named logger handles.
//!
//! # Responsibilities
//! - Define the handle surface every service hands out (this file)
//! - Per-level helpers and macros that skip formatting when disabled (helpers.rs)
//! - Scoped timing that logs once when the scope ends (perf.rs)
//!
//! # Design Decisions
//! - Handles never cache the threshold; every predicate asks the owner
//! - Handles are cheap `Arc`s and interchangeable for the same name

pub mod helpers;
pub mod perf;

use std::sync::Arc;

use crate::model::LogLevel;

pub use helpers::render_error;
pub use perf::PerformanceBlock;

/// A named source of log entries bound to one service.
pub trait Logger: Send + Sync {
    fn name(&self) -> &str;

    /// Return true if entries at `level` currently reach subscribers.
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Publish `message` at `level`. The message is used as-is.
    fn log(&self, level: LogLevel, message: &str);

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
}

/// Shared handle to any logger.
pub type SharedLogger = Arc<dyn Logger>;
