//! The immutable record produced for every logged event.

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use crate::model::LogLevel;

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: Cell<u64> = const { Cell::new(0) };
}

/// Small, process-unique integer identifying the calling thread.
///
/// Ids are handed out lazily the first time a thread asks, starting at 1.
pub fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| {
        let existing = id.get();
        if existing != 0 {
            return existing;
        }
        let assigned = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
        id.set(assigned);
        assigned
    })
}

/// A single log entry.
///
/// The message is fully rendered by the time the entry exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: DateTime<Utc>,
    name: String,
    level: LogLevel,
    thread_id: u64,
    message: String,
}

impl LogEntry {
    /// Build an entry from explicit parts.
    pub fn new(
        timestamp: DateTime<Utc>,
        name: impl Into<String>,
        level: LogLevel,
        thread_id: u64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            name: name.into(),
            level,
            thread_id,
            message: message.into(),
        }
    }

    /// Build an entry stamped with the current UTC time and calling thread.
    pub fn now(name: impl Into<String>, level: LogLevel, message: impl Into<String>) -> Self {
        Self::new(Utc::now(), name, level, current_thread_id(), message)
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Name of the logger that produced the entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn thread_id(&self) -> u64 {
        self.thread_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
