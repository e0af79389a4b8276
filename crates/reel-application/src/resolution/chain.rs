//! Resolution chain builder

use std::fmt;

use reel_domain::value_objects::{CapabilityConfig, FallbackSpec};

/// Candidates to try for one capability, primary first
///
/// Never empty: the primary is always present, even when it is not a
/// registered provider. Invalid names are discovered when the chain is walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionChain {
    candidates: Vec<String>,
}

impl ResolutionChain {
    /// `[primary]` followed by the fallbacks in order, skipping the primary
    /// and any name already present
    pub fn build(primary: &str, fallback: Option<&FallbackSpec>) -> Self {
        let mut candidates = vec![primary.to_string()];
        for name in fallback.map(FallbackSpec::names).unwrap_or_default() {
            if !candidates.iter().any(|existing| existing == name) {
                candidates.push(name.to_string());
            }
        }
        Self { candidates }
    }

    /// Chain for a capability's configuration section
    pub fn from_config(config: &CapabilityConfig) -> Self {
        Self::build(&config.provider, config.fallback.as_ref())
    }

    /// The configured primary
    pub fn primary(&self) -> &str {
        &self.candidates[0]
    }

    /// Candidates in order
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Iterate candidates in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(String::as_str)
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always `false`; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl fmt::Display for ResolutionChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.candidates.join(" -> "))
    }
}
