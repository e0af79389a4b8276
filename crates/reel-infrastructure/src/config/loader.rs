//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use reel_domain::error::{Error, Result};
use reel_domain::value_objects::{CapabilityConfig, CapabilityName, FallbackSpec};

use crate::config::{AppConfig, LoggingConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Loads `AppConfig` from defaults, a TOML file and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Explicit TOML file; default locations are searched when absent
    config_path: Option<PathBuf>,

    /// Prefix of environment overrides, without the trailing underscore
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader using `REEL_` variables and default file discovery
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read this TOML file instead of searching default locations
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use `prefix` instead of `REEL` for environment overrides
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `REEL_AI__PROVIDER`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys so provider names keep theirs
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Load again, picking up file and environment changes
    pub fn reload(&self) -> Result<AppConfig> {
        self.load()
    }

    /// Write `config` as pretty TOML to `path`
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Explicit configuration file, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject configurations the resolver cannot work with
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_app_settings(config)?;
    validate_logging_config(&config.logging)?;
    for capability in CapabilityName::ALL {
        validate_capability_config(capability, config.capability(capability))?;
    }
    Ok(())
}

fn validate_app_settings(config: &AppConfig) -> Result<()> {
    if config.app.content_limit == 0 {
        return Err(Error::configuration("Content limit cannot be 0"));
    }
    if config.output.dir.as_os_str().is_empty() {
        return Err(Error::configuration("Output directory cannot be empty"));
    }
    Ok(())
}

fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    parse_log_level(&logging.level).map(|_| ())
}

fn validate_capability_config(
    capability: CapabilityName,
    section: &CapabilityConfig,
) -> Result<()> {
    if section.provider.trim().is_empty() {
        return Err(Error::configuration(format!(
            "Primary {capability} provider cannot be empty"
        )));
    }
    if let Some(FallbackSpec::Many(names)) = &section.fallback {
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(Error::configuration(format!(
                "{capability} fallback list cannot contain empty names"
            )));
        }
    }
    Ok(())
}

/// Builds an `AppConfig` in code, starting from defaults
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Start from `AppConfig::default()`
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Replace the logging section
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set the output directory
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.output.dir = dir.into();
        self
    }

    /// Replace the selection of one capability
    pub fn with_capability(
        mut self,
        capability: CapabilityName,
        section: CapabilityConfig,
    ) -> Self {
        *self.config.capability_mut(capability) = section;
        self
    }

    /// Finish building
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
