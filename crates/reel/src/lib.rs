//! # Reel
//!
//! Short-form video pipeline where every step (content, script, speech,
//! video, upload, storage) is served by a configurable provider with ordered
//! fallbacks.
//!
//! This crate is the public facade: it re-exports the layers and hosts the
//! `reel` command line.
//!
//! ## Example
//!
//! ```ignore
//! use reel::infrastructure::{ConfigLoader, init_app};
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let report = context.pipeline().run(&context.pipeline_request()).await?;
//! println!("{}", reel::render::report(&report));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Capability contracts, value objects, errors
//! - `application` - Registry, resolution chains, fallback executor, pipeline
//! - `infrastructure` - Configuration, logging, observers, wiring

/// Domain layer - core types and capability contracts
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use reel_domain::*;
}

/// Application layer - registry, resolver and pipeline
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use reel_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use reel_infrastructure::*;
}

pub mod cli;
pub mod render;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export main entry point at the crate root
pub use cli::{Cli, Command, run};
