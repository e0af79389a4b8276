//! Application wiring
//!
//! Providers are discovered through linkme slices and owned by an explicit
//! `ProviderRegistry`; there is no container. `bootstrap` assembles the
//! resolver and pipeline, `resolver` exposes listing views.

pub mod bootstrap;
pub mod resolver;

pub use bootstrap::{AppContext, build_context, init_app};
pub use resolver::{AvailableProviders, ChainEntry, describe_chain, list_available_providers};
