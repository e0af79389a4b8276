//! Media, upload and persistence value objects

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A generated audio or video file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    /// Location on disk
    pub path: PathBuf,
    /// Playback length in seconds
    pub duration_secs: f64,
    /// Provider that produced the file
    pub provider: String,
    /// Provider-specific details (resolution, size, language, ...)
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl MediaFile {
    /// Create a media file description
    pub fn new(path: impl Into<PathBuf>, duration_secs: f64, provider: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            duration_secs,
            provider: provider.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.metadata.insert(key.into(), value.to_string());
        self
    }
}

/// Input of a video assembly call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRequest {
    /// Narration audio
    pub audio_path: PathBuf,
    /// Narration text, used for captions
    pub script: String,
    /// Optional background video or image
    pub background: Option<PathBuf>,
    /// Where to write the result; providers pick a path when absent
    pub output_path: Option<PathBuf>,
}

impl VideoRequest {
    /// Request assembly of `audio_path` narrated by `script`
    pub fn new(audio_path: impl Into<PathBuf>, script: impl Into<String>) -> Self {
        Self {
            audio_path: audio_path.into(),
            script: script.into(),
            background: None,
            output_path: None,
        }
    }

    /// Use a background asset
    pub fn with_background(mut self, background: impl Into<PathBuf>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Write the result to a fixed path
    pub fn with_output_path(mut self, output: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output.into());
        self
    }
}

/// Input of an upload call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRequest {
    /// Video to publish
    pub video_path: PathBuf,
    /// Title shown on the platform
    pub title: String,
    /// Description shown on the platform
    pub description: String,
    /// Platform tags
    pub tags: Vec<String>,
}

/// Result of an upload call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Platform identifier of the published video
    pub id: String,
    /// Where the video can be watched
    pub url: String,
    /// Platform status (`uploaded`, `skipped`, ...)
    pub status: String,
}

/// A database row as a JSON object
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Equality filters applied to a query (column -> value)
pub type Filters = serde_json::Map<String, serde_json::Value>;
