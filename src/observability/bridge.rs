//! Forwarding of entries into `tracing`.
//!
//! Hosts that already run a `tracing` subscriber can attach the bridge to a
//! service's entry stream and get every entry that passes the threshold as a
//! `tracing` event on the `ambient_log` target.
//!
//! | entry level | tracing level |
//! |-------------|---------------|
//! | verbose     | TRACE         |
//! | debug       | DEBUG         |
//! | info, perf  | INFO          |
//! | warn        | WARN          |
//! | error       | ERROR         |

use crate::model::{LogEntry, LogLevel};
use crate::service::{Entries, Subscription};

/// Re-emit `entry` as a `tracing` event, mapping levels as in the table
/// above. Entries at the none level produce no event.
pub fn emit(entry: &LogEntry) {
    let logger = entry.name();
    let thread = entry.thread_id();
    let message = entry.message();
    match entry.level() {
        LogLevel::Verbose => {
            tracing::trace!(target: "ambient_log", logger, thread, "{}", message)
        }
        LogLevel::Debug => {
            tracing::debug!(target: "ambient_log", logger, thread, "{}", message)
        }
        LogLevel::Info => {
            tracing::info!(target: "ambient_log", logger, thread, "{}", message)
        }
        LogLevel::Perf => {
            tracing::info!(target: "ambient_log", logger, thread, perf = true, "{}", message)
        }
        LogLevel::Warn => {
            tracing::warn!(target: "ambient_log", logger, thread, "{}", message)
        }
        LogLevel::Error => {
            tracing::error!(target: "ambient_log", logger, thread, "{}", message)
        }
        LogLevel::None => {}
    }
}

/// Forward every entry from `entries` to `tracing` until the returned
/// subscription is dropped.
pub fn forward_to_tracing(entries: &Entries) -> Subscription {
    entries.subscribe(emit)
}
