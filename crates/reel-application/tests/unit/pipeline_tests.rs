//! Tests for the pipeline use case

use std::sync::Arc;

use reel_application::ports::infrastructure::InMemoryConfigSource;
use reel_application::ports::registry::ProviderRegistry;
use reel_application::resolution::ProviderResolver;
use reel_application::use_cases::{PipelineRequest, PipelineService};
use reel_domain::constants::VIDEOS_TABLE;
use reel_domain::error::Error;
use reel_domain::ports::{
    AiCapability, ContentCapability, DatabaseCapability, TtsCapability, UploadCapability,
    VideoCapability,
};
use reel_domain::value_objects::{CandidateRole, CapabilityConfig, CapabilityName};

use crate::support::{
    Construct, Counters, Operate, as_ai, as_content, as_database, as_tts, as_upload, as_video,
    register_scripted,
};

struct Harness {
    service: PipelineService,
    database: Arc<Counters>,
}

fn harness(ai_primary: Operate) -> Harness {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<ContentCapability>(&mut registry, "quotes", Construct::Ok, Operate::Ok, as_content);
    register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, ai_primary, as_ai);
    register_scripted::<AiCapability>(&mut registry, "huggingface", Construct::Ok, Operate::Ok, as_ai);
    register_scripted::<TtsCapability>(&mut registry, "gtts", Construct::Ok, Operate::Ok, as_tts);
    register_scripted::<VideoCapability>(&mut registry, "ffmpeg", Construct::Ok, Operate::Ok, as_video);
    register_scripted::<UploadCapability>(&mut registry, "none", Construct::Ok, Operate::Ok, as_upload);
    let database =
        register_scripted::<DatabaseCapability>(&mut registry, "memory", Construct::Ok, Operate::Ok, as_database);

    let config = InMemoryConfigSource::new()
        .with(CapabilityName::Content, CapabilityConfig::new("quotes"))
        .with(
            CapabilityName::Ai,
            CapabilityConfig::new("groq").with_fallback("huggingface"),
        )
        .with(CapabilityName::Tts, CapabilityConfig::new("gtts"))
        .with(CapabilityName::Video, CapabilityConfig::new("ffmpeg"))
        .with(CapabilityName::Upload, CapabilityConfig::new("none"))
        .with(CapabilityName::Database, CapabilityConfig::new("memory"));

    let resolver = ProviderResolver::new(Arc::new(registry), Arc::new(config));
    Harness {
        service: PipelineService::new(Arc::new(resolver)),
        database,
    }
}

#[tokio::test]
async fn test_pipeline_runs_every_step_through_primaries() {
    let harness = harness(Operate::Ok);

    let report = harness.service.run(&PipelineRequest::default()).await.unwrap();

    let steps: Vec<_> = report
        .steps
        .iter()
        .map(|s| (s.capability, s.provider.as_str()))
        .collect();
    assert_eq!(
        steps,
        [
            (CapabilityName::Content, "quotes"),
            (CapabilityName::Ai, "groq"),
            (CapabilityName::Tts, "gtts"),
            (CapabilityName::Video, "ffmpeg"),
            (CapabilityName::Upload, "none"),
            (CapabilityName::Database, "memory"),
        ]
    );
    assert_eq!(report.fallback_steps().count(), 0);
    assert_eq!(report.script.provider, "groq");
    assert_eq!(report.upload.status, "skipped");
    assert!(report.record_id.starts_with("video_"));
}

#[tokio::test]
async fn test_pipeline_reports_fallback_steps() {
    let harness = harness(Operate::Fail("429 Too Many Requests"));

    let report = harness.service.run(&PipelineRequest::default()).await.unwrap();

    let fallbacks: Vec<_> = report.fallback_steps().collect();
    assert_eq!(fallbacks.len(), 1);
    assert_eq!(fallbacks[0].capability, CapabilityName::Ai);
    assert_eq!(fallbacks[0].provider, "huggingface");
    assert_eq!(fallbacks[0].role, CandidateRole::Fallback);
    assert_eq!(fallbacks[0].attempts, 2);
}

#[tokio::test]
async fn test_pipeline_stores_video_record() {
    let harness = harness(Operate::Ok);
    let request = PipelineRequest {
        title: Some("Motivation".into()),
        ..PipelineRequest::default()
    };

    let report = harness.service.run(&request).await.unwrap();

    let inserted = harness.database.inserted();
    assert_eq!(inserted.len(), 1);
    let (table, record) = &inserted[0];
    assert_eq!(table, VIDEOS_TABLE);
    assert_eq!(record["id"], report.record_id.as_str());
    assert_eq!(record["content_title"], "Title from quotes");
    assert_eq!(record["script_hook"], "Hook by groq");
    assert_eq!(record["resolution"], "1080x1920");
    assert_eq!(record["video_path"], "output/video.mp4");
}

#[tokio::test]
async fn test_empty_fetch_is_not_found() {
    let harness = harness(Operate::Ok);
    let request = PipelineRequest {
        limit: 0,
        ..PipelineRequest::default()
    };

    let err = harness.service.run(&request).await.unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
}
