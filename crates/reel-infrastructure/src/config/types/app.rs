//! Main application configuration

use reel_domain::constants::{DEFAULT_CONTENT_LIMIT, DEFAULT_SCRIPT_STYLE};
use reel_domain::value_objects::{CapabilityConfig, CapabilityName, FallbackSpec};
use serde::{Deserialize, Serialize};

pub use super::logging::LoggingConfig;
pub use super::output::OutputConfig;

use crate::constants::{
    DEFAULT_AI_PROVIDER, DEFAULT_APP_NAME, DEFAULT_CONTENT_FALLBACK, DEFAULT_CONTENT_PROVIDER,
    DEFAULT_DATABASE_PROVIDER, DEFAULT_TTS_PROVIDER, DEFAULT_UPLOAD_PROVIDER,
    DEFAULT_VIDEO_PROVIDER,
};

/// General application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Application name, used in log lines
    pub name: String,
    /// Content items fetched per pipeline run
    pub content_limit: usize,
    /// Narration style handed to the script generator
    pub script_style: String,
    /// Extra case-insensitive substrings that mark a failure as a quota
    /// condition, on top of the built-in set
    pub quota_patterns: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_APP_NAME.to_string(),
            content_limit: DEFAULT_CONTENT_LIMIT,
            script_style: DEFAULT_SCRIPT_STYLE.to_string(),
            quota_patterns: Vec::new(),
        }
    }
}

/// Main application configuration
///
/// ```toml
/// [content]
/// provider = "reddit"
/// fallback = "quotes"
///
/// [ai]
/// provider = "openai_direct"
/// fallback = ["groq", "huggingface"]
///
/// [ai.providers.groq]
/// model = "llama-3.3-70b-versatile"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General settings
    pub app: AppSettings,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Output locations
    pub output: OutputConfig,
    /// Content source selection
    pub content: CapabilityConfig,
    /// Script generator selection
    pub ai: CapabilityConfig,
    /// Speech synthesizer selection
    pub tts: CapabilityConfig,
    /// Video assembler selection
    pub video: CapabilityConfig,
    /// Upload target selection
    pub upload: CapabilityConfig,
    /// Record store selection
    pub database: CapabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings::default(),
            logging: LoggingConfig::default(),
            output: OutputConfig::default(),
            content: CapabilityConfig::new(DEFAULT_CONTENT_PROVIDER)
                .with_fallback(DEFAULT_CONTENT_FALLBACK),
            ai: CapabilityConfig::new(DEFAULT_AI_PROVIDER)
                .with_fallback(FallbackSpec::Many(Vec::new())),
            tts: CapabilityConfig::new(DEFAULT_TTS_PROVIDER),
            video: CapabilityConfig::new(DEFAULT_VIDEO_PROVIDER),
            upload: CapabilityConfig::new(DEFAULT_UPLOAD_PROVIDER),
            database: CapabilityConfig::new(DEFAULT_DATABASE_PROVIDER),
        }
    }
}

impl AppConfig {
    /// Selection for `capability`
    pub fn capability(&self, capability: CapabilityName) -> &CapabilityConfig {
        match capability {
            CapabilityName::Content => &self.content,
            CapabilityName::Ai => &self.ai,
            CapabilityName::Tts => &self.tts,
            CapabilityName::Video => &self.video,
            CapabilityName::Upload => &self.upload,
            CapabilityName::Database => &self.database,
        }
    }

    /// Mutable selection for `capability`
    pub fn capability_mut(&mut self, capability: CapabilityName) -> &mut CapabilityConfig {
        match capability {
            CapabilityName::Content => &mut self.content,
            CapabilityName::Ai => &mut self.ai,
            CapabilityName::Tts => &mut self.tts,
            CapabilityName::Video => &mut self.video,
            CapabilityName::Upload => &mut self.upload,
            CapabilityName::Database => &mut self.database,
        }
    }
}
