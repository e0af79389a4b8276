//! Bootstrap Tests

use std::sync::Arc;

use reel_application::ports::ProviderRegistry;
use reel_application::resolution::ErrorClassifier;
use reel_domain::error::Error;
use reel_domain::events::ResolutionEvent;
use reel_domain::value_objects::{CapabilityConfig, CapabilityName, ErrorClass, Record};
use reel_infrastructure::config::{AppConfig, ConfigBuilder, SharedConfig};
use reel_infrastructure::di::{build_context, describe_chain, init_app};
use serde_json::json;
use tempfile::TempDir;

fn memory_config(dir: &TempDir) -> AppConfig {
    ConfigBuilder::new()
        .with_output_dir(dir.path())
        .with_capability(
            CapabilityName::Database,
            CapabilityConfig::new("memory").with_fallback("sqlite"),
        )
        .build()
}

fn record() -> Record {
    json!({"content_title": "Chai"}).as_object().cloned().unwrap()
}

#[test]
fn test_init_app_registers_linked_providers() {
    let context = init_app(AppConfig::default()).unwrap();
    let providers = context.available_providers();

    for capability in CapabilityName::ALL {
        assert!(
            !providers.for_capability(capability).is_empty(),
            "no {capability} providers linked"
        );
    }
    assert!(
        providers
            .for_capability(CapabilityName::Content)
            .iter()
            .any(|(name, _)| name == "quotes")
    );
}

#[test]
fn test_init_app_rejects_invalid_config() {
    let mut config = AppConfig::default();
    config.ai.provider = String::new();
    assert!(init_app(config).is_err());
}

#[test]
fn test_pipeline_request_uses_configured_defaults() {
    let mut config = AppConfig::default();
    config.app.content_limit = 3;
    config.app.script_style = "english".into();
    let context = init_app(config).unwrap();

    let request = context.pipeline_request();
    assert_eq!(request.limit, 3);
    assert_eq!(request.style, "english");
}

#[tokio::test]
async fn test_reload_clears_cached_providers() {
    let dir = TempDir::new().unwrap();
    let context = init_app(memory_config(&dir)).unwrap();
    let resolver = context.resolver();

    let outcome = resolver.insert_record("videos", record()).await.unwrap();
    assert_eq!(outcome.provider, "memory");
    assert_eq!(
        resolver.active_provider(CapabilityName::Database).as_deref(),
        Some("memory")
    );

    let mut next = memory_config(&dir);
    next.database = CapabilityConfig::new("sqlite");
    context.reload(next).unwrap();

    assert!(resolver.active_provider(CapabilityName::Database).is_none());
    let chain = describe_chain(resolver, CapabilityName::Database).unwrap();
    assert_eq!(chain.len(), 1);
    assert_eq!(chain[0].name, "sqlite");
    assert!(chain[0].registered);
}

#[tokio::test]
async fn test_invalid_reload_keeps_current_state() {
    let dir = TempDir::new().unwrap();
    let context = init_app(memory_config(&dir)).unwrap();
    context
        .resolver()
        .insert_record("videos", record())
        .await
        .unwrap();

    let mut broken = memory_config(&dir);
    broken.app.content_limit = 0;
    assert!(context.reload(broken).is_err());

    assert_eq!(context.config().database.provider, "memory");
    assert_eq!(
        context
            .resolver()
            .active_provider(CapabilityName::Database)
            .as_deref(),
        Some("memory")
    );
}

#[tokio::test]
async fn test_subscribers_see_resolution_events() {
    let dir = TempDir::new().unwrap();
    let context = build_context(
        SharedConfig::new(memory_config(&dir)).with_env_lookup(Arc::new(|_: &str| None)),
        ProviderRegistry::from_linked(),
    );
    let mut events = context.subscribe();

    context
        .resolver()
        .insert_record("videos", record())
        .await
        .unwrap();

    let first = events.try_recv().unwrap();
    match first {
        ResolutionEvent::ChainResolved { capability, chain } => {
            assert_eq!(capability, CapabilityName::Database);
            assert_eq!(chain, vec!["memory", "sqlite"]);
        }
        other => panic!("expected ChainResolved first, got {other:?}"),
    }
    let mut saw_success = false;
    while let Ok(event) = events.try_recv() {
        if let ResolutionEvent::CandidateSucceeded { candidate, .. } = event {
            assert_eq!(candidate, "memory");
            saw_success = true;
        }
    }
    assert!(saw_success);
}

#[test]
fn test_describe_chain_flags_unregistered_names() {
    let dir = TempDir::new().unwrap();
    let mut config = memory_config(&dir);
    config.database = CapabilityConfig::new("postgres").with_fallback("memory");
    let context = init_app(config).unwrap();

    let chain = describe_chain(context.resolver(), CapabilityName::Database).unwrap();
    assert_eq!(
        chain
            .iter()
            .map(|entry| (entry.name.as_str(), entry.registered))
            .collect::<Vec<_>>(),
        vec![("postgres", false), ("memory", true)]
    );
}

#[test]
fn test_empty_quota_patterns_keep_builtin_classification() {
    let mut config = AppConfig::default();
    config.app.quota_patterns = Vec::new();
    let context = init_app(config).unwrap();

    let failure = Error::provider("groq", "429 Too Many Requests");
    assert_eq!(context.classifier().classify(&failure), ErrorClass::Transient);
    let failure = Error::provider("groq", "invalid api key");
    assert_eq!(context.classifier().classify(&failure), ErrorClass::Unknown);
}

#[test]
fn test_configured_quota_patterns_extend_builtin_set() {
    let mut config = AppConfig::default();
    config.app.quota_patterns = vec!["model is overloaded".into()];
    let context = init_app(config).unwrap();

    let failure = Error::provider("huggingface", "Model is overloaded, retry later");
    assert_eq!(context.classifier().classify(&failure), ErrorClass::Transient);
    let failure = Error::provider("groq", "rate limit reached");
    assert_eq!(context.classifier().classify(&failure), ErrorClass::Transient);
}
