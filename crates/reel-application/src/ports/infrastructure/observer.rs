//! Resolution Observer Port
//!
//! The fallback executor reports every step of a chain walk here. Observers
//! must not block: they run inline on the invocation's call path.

use std::sync::Arc;

use reel_domain::events::ResolutionEvent;

/// Sink for resolution progress events
pub trait ResolutionObserver: Send + Sync {
    /// Handle one event
    fn notify(&self, event: &ResolutionEvent);
}

/// Observer that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ResolutionObserver for NullObserver {
    fn notify(&self, _event: &ResolutionEvent) {}
}

/// Observer forwarding each event to several observers in order
#[derive(Clone, Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ResolutionObserver>>,
}

impl CompositeObserver {
    /// Create an empty composite
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer
    pub fn with(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Number of wrapped observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observer is wrapped
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl ResolutionObserver for CompositeObserver {
    fn notify(&self, event: &ResolutionEvent) {
        for observer in &self.observers {
            observer.notify(event);
        }
    }
}
