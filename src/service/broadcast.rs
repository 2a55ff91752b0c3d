//! Multicast delivery of entries to subscribers.
//!
//! # Responsibilities
//! - Keep the set of live observers for one service
//! - Deliver each published entry to every observer, synchronously
//! - Apply the threshold gate in the public [`Entries`] view
//!
//! # Design Decisions
//! - Observers are snapshotted before delivery so no map lock is held while
//!   user code runs (an observer may subscribe or unsubscribe re-entrantly)
//! - Withdrawal flips a per-slot flag first, so a snapshot taken before the
//!   removal never calls a withdrawn observer
//! - The threshold is read per entry at publish time, never at subscribe time

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use tokio::sync::mpsc;

use crate::model::LogEntry;
use crate::service::Threshold;

type Observer = Arc<dyn Fn(&LogEntry) + Send + Sync>;

struct Slot {
    observer: Observer,
    active: Arc<AtomicBool>,
}

/// Raw, unfiltered fan-out point owned by a service.
pub(crate) struct Broadcast {
    slots: DashMap<u64, Slot>,
    next_id: AtomicU64,
}

impl Broadcast {
    pub(crate) fn new() -> Self {
        Self {
            slots: DashMap::new(),
            next_id: AtomicU64::new(0),
        }
    }

    fn attach(self: &Arc<Self>, observer: Observer) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let active = Arc::new(AtomicBool::new(true));
        self.slots.insert(
            id,
            Slot {
                observer,
                active: active.clone(),
            },
        );
        Subscription {
            link: Some(Link {
                broadcast: Arc::downgrade(self),
                id,
                active,
            }),
        }
    }

    fn detach(&self, id: u64) {
        self.slots.remove(&id);
    }

    /// Deliver `entry` to every observer attached right now.
    pub(crate) fn publish(&self, entry: &LogEntry) {
        if self.slots.is_empty() {
            return;
        }

        let targets: Vec<(Observer, Arc<AtomicBool>)> = self
            .slots
            .iter()
            .map(|slot| (slot.observer.clone(), slot.active.clone()))
            .collect();

        for (observer, active) in targets {
            if active.load(Ordering::Acquire) {
                observer(entry);
            }
        }
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.slots.len()
    }
}

struct Link {
    broadcast: Weak<Broadcast>,
    id: u64,
    active: Arc<AtomicBool>,
}

/// Handle to one observer attached to an entry stream.
///
/// Dropping the handle withdraws the observer. Use [`detach`](Self::detach)
/// to keep it attached for the lifetime of the service instead.
#[must_use = "dropping a Subscription withdraws it immediately"]
pub struct Subscription {
    link: Option<Link>,
}

impl Subscription {
    /// A subscription that was never attached to anything.
    pub(crate) fn inert() -> Self {
        Self { link: None }
    }

    /// Return true while the observer can still receive entries.
    pub fn is_active(&self) -> bool {
        self.link
            .as_ref()
            .is_some_and(|link| link.active.load(Ordering::Acquire))
    }

    /// Withdraw the observer. Equivalent to dropping the handle.
    pub fn unsubscribe(mut self) {
        self.withdraw();
    }

    /// Give up the handle but keep the observer attached.
    pub fn detach(mut self) {
        self.link = None;
    }

    fn withdraw(&mut self) {
        if let Some(link) = self.link.take() {
            link.active.store(false, Ordering::Release);
            if let Some(broadcast) = link.broadcast.upgrade() {
                broadcast.detach(link.id);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.withdraw();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[derive(Clone)]
struct Source {
    broadcast: Arc<Broadcast>,
    threshold: Arc<Threshold>,
}

/// Subscription point for the entries a service emits.
///
/// Each observer sees entries published after it subscribed whose level is at
/// or above the service threshold as it stands when the entry is published.
#[derive(Clone)]
pub struct Entries {
    source: Option<Source>,
}

impl Entries {
    pub(crate) fn live(broadcast: Arc<Broadcast>, threshold: Arc<Threshold>) -> Self {
        Self {
            source: Some(Source {
                broadcast,
                threshold,
            }),
        }
    }

    /// A stream that never emits. Subscribing to it has no effect.
    pub fn never() -> Self {
        Self { source: None }
    }

    /// Return false for streams that can never emit.
    pub fn is_live(&self) -> bool {
        self.source.is_some()
    }

    /// Attach `observer`, called synchronously on the publishing thread.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&LogEntry) + Send + Sync + 'static,
    {
        match &self.source {
            None => Subscription::inert(),
            Some(source) => {
                let threshold = source.threshold.clone();
                source.broadcast.attach(Arc::new(move |entry: &LogEntry| {
                    if entry.level() >= threshold.get() {
                        observer(entry);
                    }
                }))
            }
        }
    }

    /// Attach a channel-backed observer for callers that prefer pulling.
    pub fn receiver(&self) -> EntryReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = self.subscribe(move |entry| {
            // the receiver withdraws us on drop, so a send error is a benign race
            let _ = tx.send(entry.clone());
        });
        EntryReceiver {
            rx,
            _subscription: subscription,
        }
    }
}

impl std::fmt::Debug for Entries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entries")
            .field("live", &self.is_live())
            .finish()
    }
}

/// Pull-style view of an entry stream.
///
/// Entries queue without bound, so publishers never wait on a slow reader.
/// Dropping the receiver withdraws its subscription.
pub struct EntryReceiver {
    rx: mpsc::UnboundedReceiver<LogEntry>,
    _subscription: Subscription,
}

impl EntryReceiver {
    /// Wait for the next entry. Returns `None` once the stream can no longer emit.
    pub async fn recv(&mut self) -> Option<LogEntry> {
        self.rx.recv().await
    }

    /// Take the next queued entry without waiting.
    pub fn try_recv(&mut self) -> Option<LogEntry> {
        self.rx.try_recv().ok()
    }

    /// Take every queued entry without waiting.
    pub fn drain(&mut self) -> Vec<LogEntry> {
        let mut entries = Vec::new();
        while let Ok(entry) = self.rx.try_recv() {
            entries.push(entry);
        }
        entries
    }
}
