//! Instance cache
//!
//! One slot per capability holding the most recently constructed provider.
//! Concurrent `get`/`put` on the same slot are safe; the last writer wins and
//! readers only ever see fully constructed instances.

use dashmap::DashMap;
use reel_domain::ports::ProviderInstance;
use reel_domain::value_objects::CapabilityName;

#[derive(Debug, Clone)]
struct CachedInstance {
    provider: String,
    instance: ProviderInstance,
}

/// Live provider instances keyed by capability
#[derive(Debug, Default)]
pub struct InstanceCache {
    slots: DashMap<CapabilityName, CachedInstance>,
}

impl InstanceCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached instance of `capability`
    pub fn get(&self, capability: CapabilityName) -> Option<ProviderInstance> {
        self.slots
            .get(&capability)
            .map(|slot| slot.instance.clone())
    }

    /// Cached instance of `capability`, only if it was built for `provider`
    pub fn get_named(&self, capability: CapabilityName, provider: &str) -> Option<ProviderInstance> {
        self.slots
            .get(&capability)
            .filter(|slot| slot.provider == provider)
            .map(|slot| slot.instance.clone())
    }

    /// Name of the provider cached for `capability`
    pub fn provider_name(&self, capability: CapabilityName) -> Option<String> {
        self.slots
            .get(&capability)
            .map(|slot| slot.provider.clone())
    }

    /// Store `instance` as the live provider of `capability`, replacing any
    /// previous one
    pub fn put(&self, capability: CapabilityName, provider: impl Into<String>, instance: ProviderInstance) {
        self.slots.insert(
            capability,
            CachedInstance {
                provider: provider.into(),
                instance,
            },
        );
    }

    /// Drop the instance of `capability`; returns whether one was cached
    pub fn invalidate(&self, capability: CapabilityName) -> bool {
        self.slots.remove(&capability).is_some()
    }

    /// Drop every cached instance
    pub fn invalidate_all(&self) {
        self.slots.clear();
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
