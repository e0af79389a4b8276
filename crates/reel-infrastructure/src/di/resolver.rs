//! Provider listing
//!
//! Read-only views of the registry and the configured chains, for the CLI
//! and for diagnostics.

use std::collections::BTreeMap;
use std::fmt;

use reel_application::ports::ProviderRegistry;
use reel_application::resolution::ProviderResolver;
use reel_domain::error::Result;
use reel_domain::value_objects::CapabilityName;

/// List all providers registered through the linkme slices
pub fn list_available_providers() -> AvailableProviders {
    AvailableProviders::from_registry(&ProviderRegistry::from_linked())
}

/// Available providers by capability
#[derive(Debug, Clone, Default)]
pub struct AvailableProviders {
    /// `(name, description)` pairs per capability, ordered by name
    pub by_capability: BTreeMap<CapabilityName, Vec<(String, String)>>,
}

impl AvailableProviders {
    /// Snapshot of `registry`
    pub fn from_registry(registry: &ProviderRegistry) -> Self {
        let by_capability = registry
            .capabilities()
            .into_iter()
            .map(|capability| {
                let entries = registry
                    .list(capability)
                    .into_iter()
                    .map(|d| (d.name().to_string(), d.description().to_string()))
                    .collect();
                (capability, entries)
            })
            .collect();
        Self { by_capability }
    }

    /// Providers of one capability
    pub fn for_capability(&self, capability: CapabilityName) -> &[(String, String)] {
        self.by_capability
            .get(&capability)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl fmt::Display for AvailableProviders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available Providers:")?;
        for (capability, entries) in &self.by_capability {
            writeln!(f)?;
            writeln!(f, "{capability} providers:")?;
            for (name, desc) in entries {
                writeln!(f, "  - {name}: {desc}")?;
            }
        }
        Ok(())
    }
}

/// One candidate of a configured chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntry {
    /// Provider name
    pub name: String,
    /// Whether the registry knows the name
    pub registered: bool,
    /// Whether an instance of it is cached right now
    pub active: bool,
}

/// Chain of `capability` as the resolver would walk it now
pub fn describe_chain(
    resolver: &ProviderResolver,
    capability: CapabilityName,
) -> Result<Vec<ChainEntry>> {
    let chain = resolver.chain_for(capability)?;
    let active = resolver.active_provider(capability);
    let known = resolver.registry().names(capability);
    Ok(chain
        .iter()
        .map(|name| ChainEntry {
            name: name.to_string(),
            registered: known.contains(&name),
            active: active.as_deref() == Some(name),
        })
        .collect())
}
