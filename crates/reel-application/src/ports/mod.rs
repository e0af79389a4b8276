//! Application Ports
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Provider registration slices and the owned registry table |
//! | [`infrastructure`] | Configuration source and resolution observer ports |

pub mod infrastructure;
pub mod registry;

pub use infrastructure::{
    CapabilityConfigSource, CompositeObserver, InMemoryConfigSource, NullObserver,
    ResolutionObserver,
};
pub use registry::{ProviderConfig, ProviderDescriptor, ProviderEntry, ProviderRegistry};
