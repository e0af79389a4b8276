//! Configuration handed to provider factories

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use reel_domain::constants::DEFAULT_OUTPUT_DIR;
use reel_domain::error::{Error, Result};
use reel_domain::value_objects::{CapabilityName, ProviderSettings};

/// Configuration for provider creation
///
/// Contains all configuration options that a provider might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Capability the provider is built for
    pub capability: CapabilityName,
    /// Provider name (e.g., "groq", "gtts", "sqlite")
    pub provider: String,
    /// Model name/identifier
    pub model: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL for the provider API
    pub base_url: Option<String>,
    /// Directory generated files are written to
    pub output_dir: PathBuf,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl ProviderConfig {
    /// Create a new config for `provider` of `capability`
    pub fn new(capability: CapabilityName, provider: impl Into<String>) -> Self {
        Self {
            capability,
            provider: provider.into(),
            model: None,
            api_key: None,
            base_url: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extra: HashMap::new(),
        }
    }

    /// Create a config from the settings configured for the provider
    pub fn from_settings(
        capability: CapabilityName,
        provider: impl Into<String>,
        settings: &ProviderSettings,
    ) -> Self {
        let mut config = Self::new(capability, provider);
        config.model = settings.model.clone();
        config.api_key = settings.api_key.clone();
        config.base_url = settings.base_url.clone();
        config.extra = settings
            .options
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        config
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Environment variable consulted for this provider's API key
    ///
    /// `groq` → `GROQ_API_KEY`, `openai_direct` → `OPENAI_DIRECT_API_KEY`.
    pub fn api_key_env_var(&self) -> String {
        format!("{}_API_KEY", self.provider.to_ascii_uppercase().replace('-', "_"))
    }

    /// The API key, or a construction error naming `variable`
    pub fn require_api_key(&self, variable: &str) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::missing_credential(self.capability, &self.provider, variable))
    }

    /// Extra value, or `default` when absent
    pub fn extra_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.extra.get(key).map(String::as_str).unwrap_or(default)
    }

    /// Extra value parsed as `T`, or `default` when absent
    pub fn extra_parsed<T: FromStr>(&self, key: &str, default: T) -> Result<T> {
        match self.extra.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| {
                Error::construction(
                    self.capability,
                    &self.provider,
                    format!("invalid value for option '{key}': {raw}"),
                )
            }),
        }
    }
}
