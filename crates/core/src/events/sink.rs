//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use log::debug;

use super::DomainEvent;

/// Trait for receiving domain events.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no DB writes)
/// - Failure to emit must not affect the operation that produced the event
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);

    /// Emit multiple domain events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Fan-out sink that forwards every event to its subscribers.
///
/// Subscribers can be registered after the bus has been handed to producers,
/// which lets a service both depend on a producer and listen to it.
#[derive(Default)]
pub struct DomainEventBus {
    subscribers: RwLock<Vec<Arc<dyn DomainEventSink>>>,
}

impl DomainEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, subscriber: Arc<dyn DomainEventSink>) {
        self.subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(subscriber);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl DomainEventSink for DomainEventBus {
    fn emit(&self, event: DomainEvent) {
        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        debug!("Dispatching {:?} to {} subscriber(s)", event, subscribers.len());
        for subscriber in subscribers {
            subscriber.emit(event.clone());
        }
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock_events(&self) -> MutexGuard<'_, Vec<DomainEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.lock_events().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.lock_events().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.lock_events().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.lock_events().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.lock_events().push(event);
    }
}
