//! Configuration Source Port
//!
//! The resolver reads provider selection through this port every time it
//! builds a chain, so a reloaded configuration takes effect on the next
//! invocation without restarting.

use std::collections::HashMap;
use std::sync::RwLock;

use reel_domain::error::{Error, Result};
use reel_domain::value_objects::{CapabilityConfig, CapabilityName};

use crate::ports::registry::ProviderConfig;

/// Live source of per-capability provider selection
pub trait CapabilityConfigSource: Send + Sync {
    /// Current selection for `capability`
    ///
    /// Returns `UnknownCapability` when the configuration has no section for
    /// the capability.
    fn capability_config(&self, capability: CapabilityName) -> Result<CapabilityConfig>;

    /// Factory configuration for `provider` of `capability`
    fn provider_config(&self, capability: CapabilityName, provider: &str) -> Result<ProviderConfig> {
        let selection = self.capability_config(capability)?;
        Ok(ProviderConfig::from_settings(
            capability,
            provider,
            &selection.settings_for(provider),
        ))
    }
}

/// Configuration source backed by a map, for tests and embedding
#[derive(Debug, Default)]
pub struct InMemoryConfigSource {
    sections: RwLock<HashMap<CapabilityName, CapabilityConfig>>,
}

impl InMemoryConfigSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the section of `capability`
    pub fn with(self, capability: CapabilityName, config: CapabilityConfig) -> Self {
        self.set(capability, config);
        self
    }

    /// Add or replace the section of `capability` in place
    pub fn set(&self, capability: CapabilityName, config: CapabilityConfig) {
        if let Ok(mut sections) = self.sections.write() {
            sections.insert(capability, config);
        }
    }
}

impl CapabilityConfigSource for InMemoryConfigSource {
    fn capability_config(&self, capability: CapabilityName) -> Result<CapabilityConfig> {
        let sections = self
            .sections
            .read()
            .map_err(|_| Error::internal("configuration lock poisoned"))?;
        sections
            .get(&capability)
            .cloned()
            .ok_or_else(|| Error::unknown_capability(capability.as_str()))
    }
}
