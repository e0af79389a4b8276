//! Live configuration
//!
//! `SharedConfig` holds the current `AppConfig` behind an `ArcSwap` and
//! serves it to the resolver through the `CapabilityConfigSource` port. Each
//! invocation reads the latest snapshot, so a swapped configuration changes
//! the next chain without touching running invocations.

use std::env;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use reel_application::ports::{CapabilityConfigSource, ProviderConfig};
use reel_domain::error::Result;
use reel_domain::value_objects::{CapabilityConfig, CapabilityName};

use crate::config::{AppConfig, ConfigLoader, validate_app_config};
use crate::constants::{API_KEY_ENV_OPTION, KNOWN_CREDENTIAL_VARIABLES};

/// Reads one environment variable
pub type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Swappable application configuration
pub struct SharedConfig {
    current: ArcSwap<AppConfig>,
    env: EnvLookup,
}

impl SharedConfig {
    /// Wrap `config`, reading credentials from the process environment
    pub fn new(config: AppConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
            env: Arc::new(|name: &str| env::var(name).ok()),
        }
    }

    /// Replace the environment lookup used for credentials
    pub fn with_env_lookup(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    /// Current configuration
    pub fn snapshot(&self) -> Arc<AppConfig> {
        self.current.load_full()
    }

    /// Validate and install `config`, returning the previous one
    pub fn replace(&self, config: AppConfig) -> Result<Arc<AppConfig>> {
        validate_app_config(&config)?;
        Ok(self.current.swap(Arc::new(config)))
    }

    /// Load from `loader` and install the result
    pub fn reload(&self, loader: &ConfigLoader) -> Result<Arc<AppConfig>> {
        self.replace(loader.load()?)
    }

    /// Environment variable holding the API key of `config.provider`
    ///
    /// Order: the provider's `api_key_env` option, the well-known variable of
    /// the provider, then `<PROVIDER>_API_KEY`.
    pub fn credential_variable(config: &ProviderConfig) -> String {
        if let Some(variable) = config.extra.get(API_KEY_ENV_OPTION) {
            return variable.clone();
        }
        KNOWN_CREDENTIAL_VARIABLES
            .iter()
            .find(|(provider, _)| *provider == config.provider)
            .map_or_else(|| config.api_key_env_var(), |(_, variable)| (*variable).to_string())
    }

    fn lookup(&self, variable: &str) -> Option<String> {
        (self.env)(variable).filter(|value| !value.trim().is_empty())
    }
}

impl fmt::Debug for SharedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedConfig")
            .field("current", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl CapabilityConfigSource for SharedConfig {
    fn capability_config(&self, capability: CapabilityName) -> Result<CapabilityConfig> {
        Ok(self.current.load().capability(capability).clone())
    }

    fn provider_config(
        &self,
        capability: CapabilityName,
        provider: &str,
    ) -> Result<ProviderConfig> {
        let config = self.current.load();
        let settings = config.capability(capability).settings_for(provider);
        let mut provider_config = ProviderConfig::from_settings(capability, provider, &settings)
            .with_output_dir(config.output.dir.clone());

        if provider_config
            .api_key
            .as_deref()
            .is_none_or(|key| key.trim().is_empty())
        {
            provider_config.api_key = self.lookup(&Self::credential_variable(&provider_config));
        }
        Ok(provider_config)
    }
}
