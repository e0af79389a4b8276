//! Pipeline Service Use Case
//!
//! Turns one piece of source content into a finished, published and
//! recorded video. Every step goes through the resolver, so each capability
//! falls back independently of the others.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use reel_domain::constants::{DEFAULT_CONTENT_LIMIT, DEFAULT_SCRIPT_STYLE, VIDEOS_TABLE};
use reel_domain::error::{Error, Result};
use reel_domain::value_objects::{
    CandidateRole, CapabilityName, ContentItem, MediaFile, Record, ScriptResult, UploadReceipt,
    UploadRequest, VideoRequest,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::resolution::{InvocationOutcome, ProviderResolver};

/// Maximum length of the content title stored with a video
const MAX_STORED_TITLE_CHARS: usize = 100;

/// Parameters of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    /// Number of content items to fetch; the first one is used
    pub limit: usize,
    /// Narration style passed to the script generator
    pub style: String,
    /// Upload title; defaults to the content title
    pub title: Option<String>,
    /// Upload description; defaults to the script
    pub description: Option<String>,
    /// Upload tags
    pub tags: Vec<String>,
    /// Background asset for the video
    pub background: Option<PathBuf>,
}

impl Default for PipelineRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CONTENT_LIMIT,
            style: DEFAULT_SCRIPT_STYLE.to_string(),
            title: None,
            description: None,
            tags: Vec::new(),
            background: None,
        }
    }
}

/// Which provider served one pipeline step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Capability of the step
    pub capability: CapabilityName,
    /// Provider that served it
    pub provider: String,
    /// Primary or fallback
    pub role: CandidateRole,
    /// Number of candidates tried
    pub attempts: usize,
}

impl StepReport {
    fn from_outcome<T>(outcome: &InvocationOutcome<T>) -> Self {
        Self {
            capability: outcome.capability,
            provider: outcome.provider.clone(),
            role: outcome.role(),
            attempts: outcome.attempts.len(),
        }
    }
}

/// Everything a pipeline run produced
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Content the video was made from
    pub content: ContentItem,
    /// Generated script
    pub script: ScriptResult,
    /// Narration audio
    pub audio: MediaFile,
    /// Assembled video
    pub video: MediaFile,
    /// Upload result
    pub upload: UploadReceipt,
    /// Id of the stored video record
    pub record_id: String,
    /// Providers used, in pipeline order
    pub steps: Vec<StepReport>,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl PipelineReport {
    /// Steps served by a fallback provider
    pub fn fallback_steps(&self) -> impl Iterator<Item = &StepReport> {
        self.steps
            .iter()
            .filter(|step| step.role == CandidateRole::Fallback)
    }
}

/// Pipeline orchestration over a shared resolver
#[derive(Clone)]
pub struct PipelineService {
    resolver: Arc<ProviderResolver>,
}

impl PipelineService {
    /// Create a pipeline driving `resolver`
    pub fn new(resolver: Arc<ProviderResolver>) -> Self {
        Self { resolver }
    }

    /// The resolver every step goes through
    pub fn resolver(&self) -> &Arc<ProviderResolver> {
        &self.resolver
    }

    /// Run every step once
    pub async fn run(&self, request: &PipelineRequest) -> Result<PipelineReport> {
        let started = Instant::now();
        let mut steps = Vec::with_capacity(CapabilityName::ALL.len());

        let fetched = self.resolver.fetch_content(request.limit).await?;
        steps.push(StepReport::from_outcome(&fetched));
        let content = fetched
            .into_value()
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found("content item"))?;
        info!("Got content: {}", content.title);

        let script = self
            .resolver
            .generate_script(&content, &request.style)
            .await?;
        steps.push(StepReport::from_outcome(&script));
        let script = script.into_value();
        info!("Script generated ({} chars)", script.full_script.len());

        let audio = self
            .resolver
            .text_to_speech(&script.full_script, None)
            .await?;
        steps.push(StepReport::from_outcome(&audio));
        let audio = audio.into_value();
        info!("Audio created: {:.1}s at {}", audio.duration_secs, audio.path.display());

        let mut video_request = VideoRequest::new(&audio.path, &script.full_script);
        if let Some(background) = &request.background {
            video_request = video_request.with_background(background);
        }
        let video = self.resolver.assemble_video(&video_request).await?;
        steps.push(StepReport::from_outcome(&video));
        let video = video.into_value();
        info!("Video created: {:.1}s at {}", video.duration_secs, video.path.display());

        let upload_request = UploadRequest {
            video_path: video.path.clone(),
            title: request
                .title
                .clone()
                .unwrap_or_else(|| content.title.clone()),
            description: request
                .description
                .clone()
                .unwrap_or_else(|| script.full_script.clone()),
            tags: request.tags.clone(),
        };
        let upload = self.resolver.upload(&upload_request).await?;
        steps.push(StepReport::from_outcome(&upload));
        let upload = upload.into_value();
        info!("Upload {}: {}", upload.status, upload.url);

        let record = video_record(&content, &script, &audio, &video, &upload);
        let stored = self.resolver.insert_record(VIDEOS_TABLE, record).await?;
        steps.push(StepReport::from_outcome(&stored));
        let record_id = stored.into_value();
        info!("Saved to database: {}", record_id);

        Ok(PipelineReport {
            content,
            script,
            audio,
            video,
            upload,
            record_id,
            steps,
            elapsed: started.elapsed(),
        })
    }
}

/// Row stored in the videos table
fn video_record(
    content: &ContentItem,
    script: &ScriptResult,
    audio: &MediaFile,
    video: &MediaFile,
    upload: &UploadReceipt,
) -> Record {
    let title: String = content.title.chars().take(MAX_STORED_TITLE_CHARS).collect();
    let fields = json!({
        "id": format!("video_{}", Uuid::new_v4().simple()),
        "content_title": title,
        "script_hook": script.hook,
        "audio_path": audio.path.display().to_string(),
        "video_path": video.path.display().to_string(),
        "duration": video.duration_secs,
        "resolution": video.metadata.get("resolution"),
        "upload_url": upload.url,
        "upload_status": upload.status,
        "created_at": Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    });
    match fields {
        serde_json::Value::Object(map) => map,
        _ => Record::new(),
    }
}
