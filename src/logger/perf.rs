//! Scoped performance timing.
//!
//! # States
//! - Active: timer running, nothing logged yet
//! - Finalized: the single `Perf` entry has been emitted (or never will be)
//!
//! # State Transitions
//! ```text
//! Active → Finalized: complete() or drop, whichever happens first
//! ```
//!
//! The empty block starts out Finalized and never logs.

use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::logger::{Logger, SharedLogger};
use crate::model::LogLevel;

/// Times a scope and logs the elapsed time once, when the scope ends.
///
/// The entry is emitted on [`complete`](Self::complete) or on drop, so early
/// returns, `?` and unwinding all finalize the block. Completing twice is a
/// no-op, and when several threads race to complete the same block exactly one
/// of them logs.
///
/// The block holds its own handle to the logger, so it can outlive the
/// handle it was started from and move across threads.
///
/// The message has the form `"<message> [<hh:mm:ss.fffffff> (<ms>ms)]"`.
pub struct PerformanceBlock {
    owner: Option<SharedLogger>,
    message: String,
    started: Instant,
    active: AtomicBool,
}

impl PerformanceBlock {
    /// Start timing now. `message` is logged through `owner` when the block ends.
    pub fn new(owner: SharedLogger, message: impl Into<String>) -> Self {
        Self {
            owner: Some(owner),
            message: message.into(),
            started: Instant::now(),
            active: AtomicBool::new(true),
        }
    }

    /// A block that is already finalized and never logs.
    pub fn empty() -> Self {
        Self {
            owner: None,
            message: String::new(),
            started: Instant::now(),
            active: AtomicBool::new(false),
        }
    }

    pub fn is_finalized(&self) -> bool {
        !self.active.load(Ordering::Acquire)
    }

    /// Time since the block started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stop timing and emit the `Perf` entry, unless already finalized.
    pub fn complete(&self) {
        if self
            .active
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        let elapsed = self.started.elapsed();
        if let Some(owner) = &self.owner {
            let message = format!(
                "{} [{} ({}ms)]",
                self.message,
                format_elapsed(elapsed),
                elapsed.as_millis()
            );
            owner.log(LogLevel::Perf, &message);
        }
    }
}

impl Default for PerformanceBlock {
    fn default() -> Self {
        Self::empty()
    }
}

impl Drop for PerformanceBlock {
    fn drop(&mut self) {
        self.complete();
    }
}

impl std::fmt::Debug for PerformanceBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerformanceBlock")
            .field("logger", &self.owner.as_ref().map(|owner| owner.name()))
            .field("message", &self.message)
            .field("finalized", &self.is_finalized())
            .finish()
    }
}

/// Render a duration as `[d.]hh:mm:ss[.fffffff]`, with 100ns resolution.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let days = total_secs / 86_400;
    let hours = (total_secs / 3_600) % 24;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;
    let ticks = elapsed.subsec_nanos() / 100;

    let mut out = String::with_capacity(20);
    if days > 0 {
        let _ = write!(out, "{days}.");
    }
    let _ = write!(out, "{hours:02}:{minutes:02}:{seconds:02}");
    if ticks > 0 {
        let _ = write!(out, ".{ticks:07}");
    }
    out
}
