//! AI Provider Registry
//!
//! Auto-registration slice for script generation providers.

use reel_domain::ports::AiProvider;

use super::ProviderEntry;

/// Registry entry for script generation providers
pub type AiProviderEntry = ProviderEntry<dyn AiProvider>;

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static AI_PROVIDERS: [AiProviderEntry] = [..];

/// List all registered script generation providers as `(name, description)` pairs
pub fn list_ai_providers() -> Vec<(&'static str, &'static str)> {
    AI_PROVIDERS.iter().map(ProviderEntry::summary).collect()
}
