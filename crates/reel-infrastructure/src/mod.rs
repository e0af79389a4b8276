//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//! All adapters live in the reel-providers crate and reach the resolver through
//! the linkme registry.
//!
//! ## Module Categories
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration with live reload |
//! | [`di`] | Composition root: registry, resolver and pipeline |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`observability`] | Resolution observers (tracing, broadcast) |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod observability;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, SharedConfig};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
