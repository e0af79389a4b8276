//! Text-to-speech port

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::MediaFile;

/// Synthesizes narration audio
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Convert `text` to an audio file, written to `output_path` when given
    async fn text_to_speech(&self, text: &str, output_path: Option<&Path>) -> Result<MediaFile>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}
