//! Video Provider Registry
//!
//! Auto-registration slice for video assembly providers.

use reel_domain::ports::VideoProvider;

use super::ProviderEntry;

/// Registry entry for video assembly providers
pub type VideoProviderEntry = ProviderEntry<dyn VideoProvider>;

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static VIDEO_PROVIDERS: [VideoProviderEntry] = [..];

/// List all registered video assembly providers as `(name, description)` pairs
pub fn list_video_providers() -> Vec<(&'static str, &'static str)> {
    VIDEO_PROVIDERS.iter().map(ProviderEntry::summary).collect()
}
