//! Rendering Tests

use std::time::Duration;

use reel::application::use_cases::{PipelineReport, StepReport};
use reel::domain::{
    CandidateRole, CapabilityName, ContentItem, ContentKind, MediaFile, ScriptResult,
    UploadReceipt,
};
use reel::infrastructure::config::AppConfig;
use reel::infrastructure::di::{ChainEntry, init_app};
use reel::render;

fn step(
    capability: CapabilityName,
    provider: &str,
    role: CandidateRole,
    attempts: usize,
) -> StepReport {
    StepReport {
        capability,
        provider: provider.into(),
        role,
        attempts,
    }
}

#[test]
fn test_report_marks_fallback_steps() {
    let report = PipelineReport {
        content: ContentItem::new(
            "q1",
            ContentKind::Quote,
            "Chai",
            "Chai pe charcha",
            "Curated Hinglish",
            75.0,
        ),
        script: ScriptResult::from_sections("Suno!", "Chai pe charcha", "Like karo", "groq"),
        audio: MediaFile::new("output/audio/tts_1.mp3", 12.0, "gtts"),
        video: MediaFile::new("output/videos/video_1.mp4", 12.0, "ffmpeg"),
        upload: UploadReceipt {
            id: "local_1".into(),
            url: "output/videos/video_1.mp4".into(),
            status: "skipped".into(),
        },
        record_id: "1".into(),
        steps: vec![
            step(CapabilityName::Content, "quotes", CandidateRole::Fallback, 2),
            step(CapabilityName::Ai, "groq", CandidateRole::Primary, 1),
        ],
        elapsed: Duration::from_millis(1500),
    };

    let text = render::report(&report);
    assert!(text.contains("Content:  Chai (Curated Hinglish)"));
    assert!(text.contains("quotes (fallback) after 2 attempt(s)"));
    assert!(text.contains("groq after 1 attempt(s)"));
    assert!(text.contains("Upload:   output/videos/video_1.mp4 [skipped]"));
}

#[test]
fn test_chain_rendering() {
    let entries = vec![
        ChainEntry {
            name: "postgres".into(),
            registered: false,
            active: false,
        },
        ChainEntry {
            name: "memory".into(),
            registered: true,
            active: true,
        },
    ];

    let text = render::chain(CapabilityName::Database, &entries);
    assert!(text.starts_with("database chain:"));
    assert!(text.contains("1. postgres (primary) [not registered]"));
    assert!(text.contains("2. memory (fallback) [active]"));
}

#[test]
fn test_provider_listing_for_one_capability() {
    let context = init_app(AppConfig::default()).unwrap();
    let text = render::providers(
        &context.available_providers(),
        Some(CapabilityName::Upload),
    );

    assert!(text.starts_with("upload providers:"));
    assert!(text.contains("  - none: "));
    assert!(text.contains("  - youtube: "));
    assert!(!text.contains("gtts"));
}
