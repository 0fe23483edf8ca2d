//! In-memory event log adapter.
//!
//! Captures the registry's event side channel in publish order so hosts
//! and tests can assert on exactly what was emitted.

use std::sync::RwLock;

use crate::events::RegistryEvent;
use crate::ports::EventSink;

// =============================================================================
// IN-MEMORY EVENT LOG
// =============================================================================

/// Event sink that retains everything published, oldest first.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<RegistryEvent>>,
}

impl InMemoryEventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every published event, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.read().unwrap().clone()
    }

    /// Number of events published so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().unwrap().len()
    }

    /// Returns true if nothing was published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().unwrap().is_empty()
    }

    /// Drops every retained event.
    pub fn clear(&self) {
        self.events.write().unwrap().clear();
    }
}

impl EventSink for InMemoryEventLog {
    fn publish(&self, event: RegistryEvent) {
        self.events.write().unwrap().push(event);
    }
}

// =============================================================================
// NULL EVENT SINK
// =============================================================================

/// Event sink that drops everything, for hosts that do not observe events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn publish(&self, _event: RegistryEvent) {}
}

// =============================================================================
// TESTS
// =============================================================================
