//! The contraction log: an ordered, persisted collection of events.
//!
//! Ordering invariant: `events` is descending by timestamp (most recent
//! first) at all times after any mutation. The log exclusively owns the
//! in-memory list and mirrors every mutation to the store.

use chrono::{DateTime, Utc};
use log::warn;

use crate::contraction::{intervals, ContractionEvent, Spacing};
use crate::error::{RecordError, StoreError};
use crate::storage::ContractionStore;

/// Observer for log mutations. Called synchronously after the in-memory
/// list changes; implementations must not block.
pub trait LogObserver: Send {
    fn on_log_changed(&self, events: &[ContractionEvent]);
}

pub struct ContractionLog {
    store: ContractionStore,
    events: Vec<ContractionEvent>,
    observers: Vec<Box<dyn LogObserver>>,
}

impl ContractionLog {
    /// Create an empty log over the given store. Call [`load`](Self::load)
    /// once at startup to hydrate it.
    pub fn new(store: ContractionStore) -> Self {
        Self {
            store,
            events: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn LogObserver>) {
        self.observers.push(observer);
    }

    /// Hydrate from the store, re-sorting descending by timestamp
    /// regardless of stored order.
    ///
    /// A missing file is not an error: the log starts empty. A corrupt
    /// file also leaves the log empty, but the parse error is returned so
    /// the caller can surface it rather than losing data silently.
    pub fn load(&mut self) -> Result<usize, StoreError> {
        match self.store.load() {
            Ok(mut events) => {
                events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                self.events = events;
                self.notify();
                Ok(self.events.len())
            }
            Err(e) => {
                warn!("falling back to empty contraction log: {e}");
                self.events.clear();
                self.notify();
                Err(e)
            }
        }
    }

    /// Record a contraction at the current instant.
    pub fn record_now(&mut self) -> Result<ContractionEvent, RecordError> {
        self.record_at(Utc::now())
    }

    /// Record a contraction at an explicit instant and persist the full
    /// list. The in-memory insertion succeeds even when persistence
    /// fails; the error then carries the event so nothing is lost.
    pub fn record_at(&mut self, at: DateTime<Utc>) -> Result<ContractionEvent, RecordError> {
        let event = ContractionEvent::at(at);

        // `at` is >= all prior timestamps under normal clock behavior, but
        // a clock step backwards must not break the ordering invariant.
        let pos = self
            .events
            .iter()
            .position(|e| e.timestamp <= event.timestamp)
            .unwrap_or(self.events.len());
        self.events.insert(pos, event.clone());
        self.notify();

        match self.store.save(&self.events) {
            Ok(()) => Ok(event),
            Err(source) => Err(RecordError { event, source }),
        }
    }

    /// Most recent first.
    pub fn events(&self) -> &[ContractionEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Per-event intervals for display, derived on demand.
    pub fn intervals(&self) -> Vec<Spacing> {
        intervals(&self.events)
    }

    /// Empty the log and remove the persisted copy. A persisted copy that
    /// is already gone is tolerated.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.events.clear();
        self.notify();
        self.store.remove()
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.on_log_changed(&self.events);
        }
    }
}
