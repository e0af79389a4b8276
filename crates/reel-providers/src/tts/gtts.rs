//! gTTS Provider
//!
//! Free speech synthesis through the Google Translate speech endpoint. The
//! endpoint accepts at most 200 characters per request, so longer text is
//! split on word boundaries and the MP3 segments are concatenated.
//!
//! Options: `language` (default `hi`), `slow` (`true`/`false`).

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use reel_application::ports::registry::{ProviderConfig, ProviderFuture, TTS_PROVIDERS, TtsProviderEntry};
use reel_domain::error::{Error, Result};
use reel_domain::ports::TtsProvider;
use reel_domain::value_objects::MediaFile;

use super::{prepare_output, write_audio};
use crate::constants::{
    AUDIO_SUBDIR, DEFAULT_HTTP_TIMEOUT, GTTS_BASE_URL, GTTS_DEFAULT_LANGUAGE, GTTS_MAX_CHUNK_CHARS,
};
use crate::utils::text::{chunk_words, estimate_narration_secs, flatten_whitespace, output_file};
use crate::utils::{HttpResponseUtils, build_http_client, request_error};

const PROVIDER_NAME: &str = "gtts";

/// Google Translate speech provider
pub struct GttsProvider {
    http_client: Client,
    base_url: String,
    language: String,
    slow: bool,
    output_dir: std::path::PathBuf,
}

impl GttsProvider {
    /// Build from provider configuration
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let language = config.extra_or("language", GTTS_DEFAULT_LANGUAGE).trim().to_string();
        if language.is_empty() {
            return Err(Error::construction(config.capability, &config.provider, "language must not be empty"));
        }

        Ok(Self {
            http_client: build_http_client(config, DEFAULT_HTTP_TIMEOUT)?,
            base_url: config.base_url.clone().unwrap_or_else(|| GTTS_BASE_URL.to_string()),
            language,
            slow: config.extra_parsed("slow", false)?,
            output_dir: config.output_dir.clone(),
        })
    }

    /// Query parameters for one chunk
    pub fn chunk_query(&self, chunk: &str, index: usize, total: usize) -> Vec<(&'static str, String)> {
        vec![
            ("ie", "UTF-8".to_string()),
            ("q", chunk.to_string()),
            ("tl", self.language.clone()),
            ("total", total.to_string()),
            ("idx", index.to_string()),
            ("textlen", chunk.chars().count().to_string()),
            ("client", "tw-ob".to_string()),
            ("ttsspeed", if self.slow { "0.24" } else { "1" }.to_string()),
        ]
    }

    async fn synthesize_chunk(&self, chunk: &str, index: usize, total: usize) -> Result<Vec<u8>> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&self.chunk_query(chunk, index, total))
            .send()
            .await
            .map_err(|e| request_error(PROVIDER_NAME, DEFAULT_HTTP_TIMEOUT, &e))?;
        HttpResponseUtils::check_and_read(response, PROVIDER_NAME).await
    }
}

#[async_trait]
impl TtsProvider for GttsProvider {
    async fn text_to_speech(&self, text: &str, output_path: Option<&Path>) -> Result<MediaFile> {
        info!("Generating audio with gTTS (language: {})", self.language);
        let clean_text = flatten_whitespace(text);
        if clean_text.is_empty() {
            return Err(Error::invalid_argument("No text to speak"));
        }

        let chunks = chunk_words(&clean_text, GTTS_MAX_CHUNK_CHARS);
        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            debug!("gTTS chunk {}/{}", index + 1, chunks.len());
            audio.extend(self.synthesize_chunk(chunk, index, chunks.len()).await?);
        }

        let default = output_file(&self.output_dir, AUDIO_SUBDIR, "tts", &clean_text, "mp3");
        let path = prepare_output(output_path, default).await?;
        write_audio(&path, &audio).await?;

        let word_count = clean_text.split_whitespace().count();
        let duration = estimate_narration_secs(&clean_text);
        info!("Audio generated: {:.1}s", duration);

        Ok(MediaFile::new(path, duration, PROVIDER_NAME)
            .with_metadata("language", &self.language)
            .with_metadata("word_count", word_count)
            .with_metadata("chunks", chunks.len()))
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn gtts_factory(config: &ProviderConfig) -> ProviderFuture<dyn TtsProvider> {
    let config = config.clone();
    Box::pin(async move {
        let provider: Arc<dyn TtsProvider> = Arc::new(GttsProvider::from_config(&config)?);
        Ok(provider)
    })
}

#[linkme::distributed_slice(TTS_PROVIDERS)]
static GTTS_PROVIDER: TtsProviderEntry = TtsProviderEntry {
    name: PROVIDER_NAME,
    description: "Google Translate text-to-speech (free, Hindi by default)",
    factory: gtts_factory,
};
