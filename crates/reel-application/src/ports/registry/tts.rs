//! TTS Provider Registry
//!
//! Auto-registration slice for text-to-speech providers.

use reel_domain::ports::TtsProvider;

use super::ProviderEntry;

/// Registry entry for text-to-speech providers
pub type TtsProviderEntry = ProviderEntry<dyn TtsProvider>;

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static TTS_PROVIDERS: [TtsProviderEntry] = [..];

/// List all registered text-to-speech providers as `(name, description)` pairs
pub fn list_tts_providers() -> Vec<(&'static str, &'static str)> {
    TTS_PROVIDERS.iter().map(ProviderEntry::summary).collect()
}
