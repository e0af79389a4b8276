//! Resolution of the bundled providers through the fallback executor
//!
//! Network endpoints point at a closed local port so every remote call fails
//! fast and deterministically.

use std::sync::Arc;

use reel_application::ports::{InMemoryConfigSource, ProviderRegistry};
use reel_application::resolution::ProviderResolver;
use reel_domain::constants::VIDEOS_TABLE;
use reel_domain::error::Error;
use reel_domain::value_objects::{
    CapabilityConfig, CapabilityName, FailureStage, ProviderSettings, Record,
};

const CLOSED_PORT: &str = "http://127.0.0.1:9";

fn unreachable() -> ProviderSettings {
    ProviderSettings {
        base_url: Some(CLOSED_PORT.to_string()),
        ..ProviderSettings::default()
    }
}

fn resolver(config: InMemoryConfigSource) -> ProviderResolver {
    ProviderResolver::new(Arc::new(ProviderRegistry::from_linked()), Arc::new(config))
}

#[tokio::test]
async fn test_ai_chain_without_credentials_is_exhausted_at_construction() {
    let config = InMemoryConfigSource::new().with(
        CapabilityName::Ai,
        CapabilityConfig::new("openai_direct").with_fallback(vec!["groq", "huggingface"]),
    );
    let resolver = resolver(config);
    let item = reel_domain::value_objects::ContentItem::new(
        "1",
        reel_domain::value_objects::ContentKind::Fact,
        "Zero",
        "Zero ka invention India mein hua.",
        "test",
        80.0,
    );

    let err = resolver.generate_script(&item, "hinglish").await.unwrap_err();
    let attempts = err.attempts().expect("exhausted chain");
    assert_eq!(attempts.len(), 3);
    for attempt in attempts {
        assert_eq!(attempt.failure().map(|f| f.stage), Some(FailureStage::Construction));
    }
    assert!(err.to_string().contains("HUGGINGFACE_API_KEY"));
    assert_eq!(resolver.active_provider(CapabilityName::Ai), None);
}

#[tokio::test]
async fn test_content_falls_back_from_reddit_to_curated_quotes() {
    let config = InMemoryConfigSource::new().with(
        CapabilityName::Content,
        CapabilityConfig::new("reddit")
            .with_fallback("quotes")
            .with_provider_settings("reddit", unreachable())
            .with_provider_settings("quotes", unreachable()),
    );
    let resolver = resolver(config);

    let outcome = resolver.fetch_content(1).await.unwrap();
    assert_eq!(outcome.provider, "quotes");
    assert!(outcome.served_by_fallback());
    assert_eq!(outcome.attempts.len(), 2);
    assert_eq!(
        outcome.attempts[0].failure().map(|f| f.stage),
        Some(FailureStage::Operation)
    );
    assert_eq!(outcome.value.len(), 1);
    assert_eq!(resolver.active_provider(CapabilityName::Content).as_deref(), Some("quotes"));
}

#[tokio::test]
async fn test_unregistered_name_falls_through_to_memory_database() {
    let config = InMemoryConfigSource::new().with(
        CapabilityName::Database,
        CapabilityConfig::new("postgres").with_fallback("memory"),
    );
    let resolver = resolver(config);

    let mut record = Record::new();
    record.insert("id".into(), "video_1".into());
    let outcome = resolver.insert_record(VIDEOS_TABLE, record).await.unwrap();
    assert_eq!(outcome.value, "video_1");
    assert_eq!(outcome.provider, "memory");
    assert_eq!(
        outcome.attempts[0].failure().map(|f| f.stage),
        Some(FailureStage::Lookup)
    );

    let rows = resolver.query_records(VIDEOS_TABLE, None).await.unwrap();
    assert_eq!(rows.value.len(), 1);
}

#[tokio::test]
async fn test_sqlite_database_through_resolver() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = ProviderSettings::default();
    settings.options.insert(
        "db_path".into(),
        dir.path().join("reel.db").display().to_string(),
    );
    let config = InMemoryConfigSource::new().with(
        CapabilityName::Database,
        CapabilityConfig::new("sqlite").with_provider_settings("sqlite", settings),
    );
    let resolver = resolver(config);

    let mut record = Record::new();
    record.insert("id".into(), "video_9".into());
    record.insert("upload_status".into(), "skipped".into());
    resolver.insert_record(VIDEOS_TABLE, record).await.unwrap();

    let mut changes = Record::new();
    changes.insert("upload_status".into(), "uploaded".into());
    let updated = resolver
        .update_record(VIDEOS_TABLE, "video_9", changes)
        .await
        .unwrap();
    assert!(updated.value);
    assert!(!updated.served_by_fallback());
}

#[tokio::test]
async fn test_unknown_capability_section_is_not_a_fallback() {
    let resolver = resolver(InMemoryConfigSource::new());
    let err = resolver.fetch_content(1).await.unwrap_err();
    assert!(matches!(err, Error::UnknownCapability { .. }));
}
