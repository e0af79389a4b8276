//! Infrastructure Ports
//!
//! Contracts the resolution core consumes from the outer layers.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`CapabilityConfigSource`] | Live per-capability provider selection |
//! | [`ResolutionObserver`] | Sink for resolution progress events |

/// Configuration source port
pub mod config_source;
/// Resolution observer port
pub mod observer;

pub use config_source::{CapabilityConfigSource, InMemoryConfigSource};
pub use observer::{CompositeObserver, NullObserver, ResolutionObserver};
