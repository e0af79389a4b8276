//! Provider Resolution & Fallback
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`ResolutionChain`] | Ordered, deduplicated candidates for one capability |
//! | [`InstanceCache`] | At most one live provider per capability |
//! | [`ErrorClassifier`] | Transient/unknown labelling of candidate failures |
//! | [`FallbackPolicy`] | Whether a failure advances the chain |
//! | [`ProviderResolver`] | Drives an invocation across the chain |

pub mod cache;
pub mod chain;
pub mod classifier;
pub mod executor;
pub mod operations;
pub mod policy;

pub use cache::InstanceCache;
pub use chain::ResolutionChain;
pub use classifier::{ErrorClassifier, QUOTA_PATTERNS, QuotaPatternClassifier, classify_message};
pub use executor::{InvocationOutcome, InvokeOptions, ProviderResolver};
pub use policy::{FallBackOnAnyError, FallbackPolicy};
