//! Upload Provider Registry
//!
//! Auto-registration slice for upload providers.

use reel_domain::ports::UploadProvider;

use super::ProviderEntry;

/// Registry entry for upload providers
pub type UploadProviderEntry = ProviderEntry<dyn UploadProvider>;

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static UPLOAD_PROVIDERS: [UploadProviderEntry] = [..];

/// List all registered upload providers as `(name, description)` pairs
pub fn list_upload_providers() -> Vec<(&'static str, &'static str)> {
    UPLOAD_PROVIDERS.iter().map(ProviderEntry::summary).collect()
}
