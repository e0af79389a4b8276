//! Owned provider table
//!
//! `ProviderRegistry` is the authoritative lookup from
//! `(CapabilityName, provider name)` to a constructor. It is built once at
//! startup from the linkme slices and passed explicitly to the resolver.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use reel_domain::error::{Error, Result};
use reel_domain::ports::{
    AiCapability, Capability, ContentCapability, DatabaseCapability, ProviderInstance,
    TtsCapability, UploadCapability, VideoCapability,
};
use reel_domain::value_objects::CapabilityName;

use super::{
    AI_PROVIDERS, CONTENT_PROVIDERS, DATABASE_PROVIDERS, ProviderConfig, ProviderEntry,
    ProviderFuture, TTS_PROVIDERS, UPLOAD_PROVIDERS, VIDEO_PROVIDERS,
};

/// Capability-independent constructor
type InstanceFactory =
    Arc<dyn Fn(ProviderConfig) -> BoxFuture<'static, Result<ProviderInstance>> + Send + Sync>;

/// Maps one `(capability, name)` pair to its constructor
#[derive(Clone)]
pub struct ProviderDescriptor {
    capability: CapabilityName,
    name: String,
    description: String,
    factory: InstanceFactory,
}

impl ProviderDescriptor {
    /// Capability the provider serves
    pub fn capability(&self) -> CapabilityName {
        self.capability
    }

    /// Provider name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Construct a new instance
    pub async fn construct(&self, config: ProviderConfig) -> Result<ProviderInstance> {
        (self.factory)(config).await
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("capability", &self.capability)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Provider table keyed by capability, then by provider name
#[derive(Clone, Default, Debug)]
pub struct ProviderRegistry {
    tables: BTreeMap<CapabilityName, BTreeMap<String, ProviderDescriptor>>,
}

impl ProviderRegistry {
    /// Create a registry with no capabilities
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every capability with an empty namespace
    pub fn with_all_capabilities() -> Self {
        let mut registry = Self::new();
        for capability in CapabilityName::ALL {
            registry.add_capability(capability);
        }
        registry
    }

    /// Collect every provider registered through the linkme slices
    pub fn from_linked() -> Self {
        let mut registry = Self::with_all_capabilities();
        registry.register_linked::<ContentCapability>(&CONTENT_PROVIDERS);
        registry.register_linked::<AiCapability>(&AI_PROVIDERS);
        registry.register_linked::<TtsCapability>(&TTS_PROVIDERS);
        registry.register_linked::<VideoCapability>(&VIDEO_PROVIDERS);
        registry.register_linked::<UploadCapability>(&UPLOAD_PROVIDERS);
        registry.register_linked::<DatabaseCapability>(&DATABASE_PROVIDERS);
        registry
    }

    fn register_linked<C: Capability>(&mut self, entries: &[ProviderEntry<C::Provider>]) {
        for entry in entries {
            self.register::<C, _>(entry.name, entry.description, entry.factory);
        }
    }

    /// Add an empty namespace for `capability` if it has none
    pub fn add_capability(&mut self, capability: CapabilityName) -> &mut Self {
        self.tables.entry(capability).or_default();
        self
    }

    /// Register a provider of capability `C`
    ///
    /// A provider already registered under the same name is replaced.
    pub fn register<C, F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        factory: F,
    ) -> &mut Self
    where
        C: Capability,
        F: Fn(&ProviderConfig) -> ProviderFuture<C::Provider> + Send + Sync + 'static,
    {
        let name = name.into();
        let factory: InstanceFactory = Arc::new(
            move |config: ProviderConfig| -> BoxFuture<'static, Result<ProviderInstance>> {
                let pending = factory(&config);
                Box::pin(async move { pending.await.map(C::wrap) })
            },
        );
        let descriptor = ProviderDescriptor {
            capability: C::NAME,
            name: name.clone(),
            description: description.into(),
            factory,
        };
        if self
            .tables
            .entry(C::NAME)
            .or_default()
            .insert(name.clone(), descriptor)
            .is_some()
        {
            tracing::warn!(capability = %C::NAME, provider = %name, "provider registered twice; keeping the last registration");
        }
        self
    }

    /// Whether `capability` has a namespace in this registry
    pub fn contains_capability(&self, capability: CapabilityName) -> bool {
        self.tables.contains_key(&capability)
    }

    /// Capabilities with a namespace, in pipeline order
    pub fn capabilities(&self) -> Vec<CapabilityName> {
        self.tables.keys().copied().collect()
    }

    /// Descriptor for `name` under `capability`
    ///
    /// Fails with `UnknownCapability` when the capability has no namespace and
    /// with `UnknownProvider` when the name is absent from it.
    pub fn resolve_descriptor(
        &self,
        capability: CapabilityName,
        name: &str,
    ) -> Result<&ProviderDescriptor> {
        let table = self
            .tables
            .get(&capability)
            .ok_or_else(|| Error::unknown_capability(capability.as_str()))?;
        table.get(name).ok_or_else(|| Error::UnknownProvider {
            capability,
            provider: name.to_string(),
            available: table.keys().cloned().collect(),
        })
    }

    /// Descriptor lookup from string identifiers
    pub fn resolve_descriptor_by_name(
        &self,
        capability: &str,
        name: &str,
    ) -> Result<&ProviderDescriptor> {
        self.resolve_descriptor(capability.parse()?, name)
    }

    /// Providers registered for `capability`, ordered by name
    pub fn list(&self, capability: CapabilityName) -> Vec<&ProviderDescriptor> {
        self.tables
            .get(&capability)
            .map(|table| table.values().collect())
            .unwrap_or_default()
    }

    /// Provider names registered for `capability`, ordered
    pub fn names(&self, capability: CapabilityName) -> Vec<&str> {
        self.tables
            .get(&capability)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
