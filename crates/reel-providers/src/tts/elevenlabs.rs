//! ElevenLabs TTS Provider
//!
//! Premium multilingual voices through the ElevenLabs REST API.
//!
//! Options: `voice` (voice id), `stability`, `similarity_boost`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::info;

use reel_application::ports::registry::{ProviderConfig, ProviderFuture, TTS_PROVIDERS, TtsProviderEntry};
use reel_domain::error::{Error, Result};
use reel_domain::ports::TtsProvider;
use reel_domain::value_objects::MediaFile;

use super::{prepare_output, write_audio};
use crate::constants::{
    AUDIO_SUBDIR, CONTENT_TYPE_JSON, ELEVENLABS_BASE_URL, ELEVENLABS_DEFAULT_MODEL,
    ELEVENLABS_DEFAULT_VOICE, TRANSFER_HTTP_TIMEOUT,
};
use crate::utils::text::{estimate_narration_secs, flatten_whitespace, output_file};
use crate::utils::{HttpResponseUtils, build_http_client, request_error};

const PROVIDER_NAME: &str = "elevenlabs";

/// ElevenLabs speech provider
pub struct ElevenLabsTtsProvider {
    http_client: Client,
    base_url: String,
    api_key: String,
    voice: String,
    model: String,
    stability: f64,
    similarity_boost: f64,
    output_dir: PathBuf,
}

impl ElevenLabsTtsProvider {
    /// Build from provider configuration; requires `ELEVENLABS_API_KEY`
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let api_key = config.require_api_key("ELEVENLABS_API_KEY")?.trim().to_string();

        Ok(Self {
            http_client: build_http_client(config, TRANSFER_HTTP_TIMEOUT)?,
            base_url: config
                .base_url
                .as_deref()
                .unwrap_or(ELEVENLABS_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            api_key,
            voice: config.extra_or("voice", ELEVENLABS_DEFAULT_VOICE).to_string(),
            model: config
                .model
                .clone()
                .unwrap_or_else(|| ELEVENLABS_DEFAULT_MODEL.to_string()),
            stability: config.extra_parsed("stability", 0.5)?,
            similarity_boost: config.extra_parsed("similarity_boost", 0.75)?,
            output_dir: config.output_dir.clone(),
        })
    }

    /// Request body for `text`
    pub fn payload(&self, text: &str) -> serde_json::Value {
        json!({
            "text": text,
            "model_id": self.model,
            "voice_settings": {
                "stability": self.stability,
                "similarity_boost": self.similarity_boost,
            }
        })
    }
}

#[async_trait]
impl TtsProvider for ElevenLabsTtsProvider {
    async fn text_to_speech(&self, text: &str, output_path: Option<&Path>) -> Result<MediaFile> {
        info!("Generating audio with ElevenLabs (voice: {})", self.voice);
        let clean_text = flatten_whitespace(text);
        if clean_text.is_empty() {
            return Err(Error::invalid_argument("No text to speak"));
        }

        let response = self
            .http_client
            .post(format!("{}/text-to-speech/{}", self.base_url, self.voice))
            .header("xi-api-key", &self.api_key)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("Accept", "audio/mpeg")
            .json(&self.payload(&clean_text))
            .send()
            .await
            .map_err(|e| request_error(PROVIDER_NAME, TRANSFER_HTTP_TIMEOUT, &e))?;
        let audio = HttpResponseUtils::check_and_read(response, PROVIDER_NAME).await?;

        let default = output_file(&self.output_dir, AUDIO_SUBDIR, "elevenlabs", &clean_text, "mp3");
        let path = prepare_output(output_path, default).await?;
        write_audio(&path, &audio).await?;

        let duration = estimate_narration_secs(&clean_text);
        info!("Audio generated: {:.1}s", duration);
        Ok(MediaFile::new(path, duration, PROVIDER_NAME)
            .with_metadata("voice", &self.voice)
            .with_metadata("model", &self.model))
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn elevenlabs_factory(config: &ProviderConfig) -> ProviderFuture<dyn TtsProvider> {
    let config = config.clone();
    Box::pin(async move {
        let provider: Arc<dyn TtsProvider> = Arc::new(ElevenLabsTtsProvider::from_config(&config)?);
        Ok(provider)
    })
}

#[linkme::distributed_slice(TTS_PROVIDERS)]
static ELEVENLABS_PROVIDER: TtsProviderEntry = TtsProviderEntry {
    name: PROVIDER_NAME,
    description: "ElevenLabs premium voice synthesis",
    factory: elevenlabs_factory,
};
