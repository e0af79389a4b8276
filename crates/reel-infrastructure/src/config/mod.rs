//! Configuration
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Serde configuration types with defaults |
//! | [`loader`] | Figment loader (defaults, TOML file, environment) |
//! | [`shared`] | Swappable live configuration feeding the resolver |

pub mod loader;
pub mod shared;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use shared::{EnvLookup, SharedConfig};
pub use types::{AppConfig, AppSettings, LoggingConfig, OutputConfig};
