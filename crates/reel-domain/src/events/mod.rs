//! Resolution Events
//!
//! Immutable facts emitted while a capability invocation walks its provider
//! chain. Observers turn them into log lines, broadcasts or metrics.
//!
//! | Event | Description |
//! |-------|-------------|
//! | [`ResolutionEvent`] | One step of a chain walk |

/// Resolution event definitions
pub mod resolution_events;

pub use resolution_events::ResolutionEvent;
