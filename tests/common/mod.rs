//! Shared utilities for integration tests.

use std::sync::{Arc, Mutex};

use ambient_log::{Entries, LogEntry, Subscription};

/// Records every entry delivered to its subscription.
#[derive(Clone, Default)]
pub struct Collector {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

#[allow(dead_code)]
impl Collector {
    /// Subscribe a new collector to `entries`.
    pub fn attach(entries: &Entries) -> (Self, Subscription) {
        let collector = Self::default();
        let sink = collector.entries.clone();
        let subscription = entries.subscribe(move |entry| sink.lock().unwrap().push(entry.clone()));
        (collector, subscription)
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries().iter().map(|e| e.message().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
