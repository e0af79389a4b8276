//! Per-capability provider selection
//!
//! How one capability picks its providers: a primary name, optional
//! fallbacks, and settings for each named provider.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fallback provider names as written in configuration
///
/// Accepts either a single name or an ordered list:
///
/// ```toml
/// fallback = "quotes"
/// fallback = ["groq", "huggingface"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FallbackSpec {
    /// A single fallback
    One(String),
    /// An ordered list of fallbacks
    Many(Vec<String>),
}

impl FallbackSpec {
    /// Fallback names in configured order
    ///
    /// A blank scalar means "no fallback".
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::One(name) if name.trim().is_empty() => Vec::new(),
            Self::One(name) => vec![name.as_str()],
            Self::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for FallbackSpec {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

impl From<Vec<&str>> for FallbackSpec {
    fn from(names: Vec<&str>) -> Self {
        Self::Many(names.into_iter().map(str::to_string).collect())
    }
}

/// Settings for one named provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Model identifier
    pub model: Option<String>,
    /// API key; providers fall back to `<NAME>_API_KEY` when absent
    pub api_key: Option<String>,
    /// Base URL override
    pub base_url: Option<String>,
    /// Free-form provider options
    pub options: BTreeMap<String, String>,
}

/// Provider selection for one capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityConfig {
    /// Primary provider name
    pub provider: String,
    /// Fallback provider names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackSpec>,
    /// Settings per provider name
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderSettings>,
}

impl CapabilityConfig {
    /// Select `provider` with no fallback
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            fallback: None,
            providers: BTreeMap::new(),
        }
    }

    /// Set the fallback providers
    pub fn with_fallback(mut self, fallback: impl Into<FallbackSpec>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Set the settings of one provider
    pub fn with_provider_settings(
        mut self,
        name: impl Into<String>,
        settings: ProviderSettings,
    ) -> Self {
        self.providers.insert(name.into(), settings);
        self
    }

    /// Settings of `name`, or defaults when not configured
    pub fn settings_for(&self, name: &str) -> ProviderSettings {
        self.providers.get(name).cloned().unwrap_or_default()
    }
}
