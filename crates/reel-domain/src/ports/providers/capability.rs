//! Capability markers
//!
//! A `Capability` ties a `CapabilityName` to the trait object type of its
//! providers. The resolution engine is generic over `Capability`, while the
//! instance cache stores every capability's provider in one map through the
//! `ProviderInstance` sum type.

use std::fmt;
use std::sync::Arc;

use super::{AiProvider, ContentProvider, DatabaseProvider, TtsProvider, UploadProvider, VideoProvider};
use crate::value_objects::CapabilityName;

/// A live, constructed provider of any capability
#[derive(Clone)]
pub enum ProviderInstance {
    /// Content provider
    Content(Arc<dyn ContentProvider>),
    /// AI provider
    Ai(Arc<dyn AiProvider>),
    /// Text-to-speech provider
    Tts(Arc<dyn TtsProvider>),
    /// Video provider
    Video(Arc<dyn VideoProvider>),
    /// Upload provider
    Upload(Arc<dyn UploadProvider>),
    /// Database provider
    Database(Arc<dyn DatabaseProvider>),
}

impl ProviderInstance {
    /// Capability the instance serves
    pub fn capability(&self) -> CapabilityName {
        match self {
            Self::Content(_) => CapabilityName::Content,
            Self::Ai(_) => CapabilityName::Ai,
            Self::Tts(_) => CapabilityName::Tts,
            Self::Video(_) => CapabilityName::Video,
            Self::Upload(_) => CapabilityName::Upload,
            Self::Database(_) => CapabilityName::Database,
        }
    }

    /// Name reported by the provider itself
    pub fn provider_name(&self) -> &str {
        match self {
            Self::Content(p) => p.provider_name(),
            Self::Ai(p) => p.provider_name(),
            Self::Tts(p) => p.provider_name(),
            Self::Video(p) => p.provider_name(),
            Self::Upload(p) => p.provider_name(),
            Self::Database(p) => p.provider_name(),
        }
    }
}

impl fmt::Debug for ProviderInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderInstance")
            .field("capability", &self.capability())
            .field("provider", &self.provider_name())
            .finish()
    }
}

/// Static description of one capability
pub trait Capability: Send + Sync + 'static {
    /// Trait object type implemented by the capability's providers
    type Provider: ?Sized + Send + Sync + 'static;

    /// Name of the capability
    const NAME: CapabilityName;

    /// Erase a provider into the capability-independent instance type
    fn wrap(provider: Arc<Self::Provider>) -> ProviderInstance;

    /// Recover the provider from an instance of this capability
    fn unwrap(instance: &ProviderInstance) -> Option<Arc<Self::Provider>>;
}

macro_rules! capability_marker {
    ($(#[$doc:meta])* $marker:ident, $variant:ident, $provider:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $marker;

        impl Capability for $marker {
            type Provider = dyn $provider;

            const NAME: CapabilityName = CapabilityName::$variant;

            fn wrap(provider: Arc<Self::Provider>) -> ProviderInstance {
                ProviderInstance::$variant(provider)
            }

            fn unwrap(instance: &ProviderInstance) -> Option<Arc<Self::Provider>> {
                match instance {
                    ProviderInstance::$variant(provider) => Some(Arc::clone(provider)),
                    _ => None,
                }
            }
        }
    };
}

capability_marker!(
    /// The `content` capability
    ContentCapability, Content, ContentProvider
);
capability_marker!(
    /// The `ai` capability
    AiCapability, Ai, AiProvider
);
capability_marker!(
    /// The `tts` capability
    TtsCapability, Tts, TtsProvider
);
capability_marker!(
    /// The `video` capability
    VideoCapability, Video, VideoProvider
);
capability_marker!(
    /// The `upload` capability
    UploadCapability, Upload, UploadProvider
);
capability_marker!(
    /// The `database` capability
    DatabaseCapability, Database, DatabaseProvider
);
