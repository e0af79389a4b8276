//! Database Provider Registry
//!
//! Auto-registration slice for persistence providers.

use reel_domain::ports::DatabaseProvider;

use super::ProviderEntry;

/// Registry entry for persistence providers
pub type DatabaseProviderEntry = ProviderEntry<dyn DatabaseProvider>;

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static DATABASE_PROVIDERS: [DatabaseProviderEntry] = [..];

/// List all registered persistence providers as `(name, description)` pairs
pub fn list_database_providers() -> Vec<(&'static str, &'static str)> {
    DATABASE_PROVIDERS.iter().map(ProviderEntry::summary).collect()
}
