//! Process-wide "current" logger service.
//!
//! # Responsibilities
//! - Hold one optional service that any component can reach without injection
//! - Default to the null service, so logging before setup is silently dropped
//! - Fail loudly only after an explicit [`clear_current`]
//!
//! # Design Decisions
//! - Prefer passing a [`SharedService`] explicitly; this slot is a fallback
//! - Lock-free reads via `ArcSwapOption`
//! - Replacing the service does not touch loggers already handed out; they stay
//!   bound to the service that created them

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwapOption;

use crate::error::{LoggingError, LoggingResult};
use crate::logger::SharedLogger;
use crate::service::null::null_service;
use crate::service::{LoggerService, LoggerServiceExt, SharedService};

static CURRENT: LazyLock<ArcSwapOption<SharedService>> =
    LazyLock::new(|| ArcSwapOption::new(Some(Arc::new(null_service()))));

/// The current service.
///
/// Returns the null service if nothing was ever installed, and
/// [`LoggingError::AmbientUnset`] if the slot was cleared.
pub fn current() -> LoggingResult<SharedService> {
    CURRENT
        .load_full()
        .map(|service| SharedService::clone(&service))
        .ok_or(LoggingError::AmbientUnset)
}

/// Install `service` for all later [`current`] calls.
pub fn set_current(service: SharedService) {
    tracing::debug!("replacing ambient logger service");
    CURRENT.store(Some(Arc::new(service)));
}

/// Empty the slot. Later [`current`] calls fail until a service is set again.
pub fn clear_current() {
    tracing::warn!("ambient logger service cleared");
    CURRENT.store(None);
}

/// Shorthand for `current()?.logger(name)`.
pub fn logger(name: &str) -> LoggingResult<SharedLogger> {
    current()?.logger(name)
}

/// Shorthand for `current()?.logger_for::<T>()`.
pub fn logger_for<T: ?Sized>() -> LoggingResult<SharedLogger> {
    current()?.logger_for::<T>()
}
