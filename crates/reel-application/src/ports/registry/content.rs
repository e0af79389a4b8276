//! Content Provider Registry
//!
//! Auto-registration slice for content acquisition providers.

use reel_domain::ports::ContentProvider;

use super::ProviderEntry;

/// Registry entry for content acquisition providers
pub type ContentProviderEntry = ProviderEntry<dyn ContentProvider>;

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static CONTENT_PROVIDERS: [ContentProviderEntry] = [..];

/// List all registered content acquisition providers as `(name, description)` pairs
pub fn list_content_providers() -> Vec<(&'static str, &'static str)> {
    CONTENT_PROVIDERS.iter().map(ProviderEntry::summary).collect()
}
