//! Registry entry shared by every capability

use std::sync::Arc;

use futures::future::BoxFuture;
use reel_domain::error::Result;

use super::ProviderConfig;

/// Future returned by a provider factory
pub type ProviderFuture<P> = BoxFuture<'static, Result<Arc<P>>>;

/// Registry entry for one provider of one capability
///
/// Each adapter registers itself with this entry using
/// `#[linkme::distributed_slice(<CAPABILITY>_PROVIDERS)]`. Factories are
/// asynchronous because construction may perform network or auth
/// handshakes.
pub struct ProviderEntry<P: ?Sized + 'static> {
    /// Provider name, unique within the capability (e.g. "groq", "gtts")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function creating a provider instance
    pub factory: fn(&ProviderConfig) -> ProviderFuture<P>,
}

impl<P: ?Sized + 'static> ProviderEntry<P> {
    /// `(name, description)` pair for listings
    pub fn summary(&self) -> (&'static str, &'static str) {
        (self.name, self.description)
    }
}
