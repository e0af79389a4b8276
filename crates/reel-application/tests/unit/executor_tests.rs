//! Tests for the fallback executor

use std::sync::Arc;
use std::time::Duration;

use reel_application::ports::infrastructure::InMemoryConfigSource;
use reel_application::ports::registry::ProviderRegistry;
use reel_application::resolution::{FallbackPolicy, InvokeOptions, ProviderResolver};
use reel_domain::error::Error;
use reel_domain::events::ResolutionEvent;
use reel_domain::ports::{AiCapability, TtsCapability};
use reel_domain::value_objects::{
    CandidateFailure, CandidateRole, CapabilityConfig, CapabilityName, ErrorClass, FailureStage,
};

use crate::support::{
    Construct, Operate, RecordingObserver, as_ai, as_tts, register_scripted, sample_item,
};

fn ai_config(primary: &str, fallback: Vec<&str>) -> Arc<InMemoryConfigSource> {
    Arc::new(InMemoryConfigSource::new().with(
        CapabilityName::Ai,
        CapabilityConfig::new(primary).with_fallback(fallback),
    ))
}

async fn script_from(resolver: &ProviderResolver) -> reel_domain::Result<String> {
    let item = sample_item();
    resolver
        .generate_script(&item, "hinglish")
        .await
        .map(|outcome| outcome.provider)
}

#[tokio::test]
async fn test_primary_success_tries_one_candidate_and_caches_it() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    let groq = register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);
    let hf = register_scripted::<AiCapability>(&mut registry, "huggingface", Construct::Ok, Operate::Ok, as_ai);
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("groq", vec!["huggingface"]));

    let outcome = resolver
        .generate_script(&sample_item(), "hinglish")
        .await
        .unwrap();

    assert_eq!(outcome.provider, "groq");
    assert_eq!(outcome.role(), CandidateRole::Primary);
    assert_eq!(outcome.attempts.len(), 1);
    assert!(outcome.attempts[0].is_success());
    assert_eq!(outcome.value.provider, "groq");
    assert_eq!(resolver.active_provider(CapabilityName::Ai).as_deref(), Some("groq"));
    assert_eq!(groq.calls(), 1);
    assert_eq!(hf.constructions(), 0);
}

#[tokio::test]
async fn test_construction_failure_then_quota_failure_then_success() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    let openai = register_scripted::<AiCapability>(
        &mut registry,
        "openai",
        Construct::Fail("OPENAI_API_KEY not found in configuration or environment"),
        Operate::Ok,
        as_ai,
    );
    register_scripted::<AiCapability>(
        &mut registry,
        "groq",
        Construct::Ok,
        Operate::Fail("429 Too Many Requests"),
        as_ai,
    );
    register_scripted::<AiCapability>(&mut registry, "huggingface", Construct::Ok, Operate::Ok, as_ai);
    let resolver = ProviderResolver::new(
        Arc::new(registry),
        ai_config("openai", vec!["groq", "huggingface"]),
    );

    let outcome = resolver
        .generate_script(&sample_item(), "hinglish")
        .await
        .unwrap();

    assert_eq!(outcome.provider, "huggingface");
    assert_eq!(outcome.value.hook, "Hook by huggingface");
    assert!(outcome.served_by_fallback());
    assert_eq!(outcome.attempts.len(), 3);

    let openai_failure = outcome.attempts[0].failure().unwrap();
    assert_eq!(outcome.attempts[0].provider, "openai");
    assert_eq!(openai_failure.stage, FailureStage::Construction);
    assert!(matches!(openai_failure.error, Error::ProviderConstruction { .. }));

    let groq_failure = outcome.attempts[1].failure().unwrap();
    assert_eq!(outcome.attempts[1].provider, "groq");
    assert_eq!(groq_failure.stage, FailureStage::Operation);
    assert_eq!(groq_failure.class, ErrorClass::Transient);

    assert_eq!(outcome.attempts[2].provider, "huggingface");
    assert!(outcome.attempts[2].is_success());
    assert_eq!(outcome.attempts[2].role, CandidateRole::Fallback);

    assert_eq!(openai.calls(), 0);
    assert_eq!(
        resolver.active_provider(CapabilityName::Ai).as_deref(),
        Some("huggingface")
    );
}

#[tokio::test]
async fn test_single_candidate_failure_exhausts_with_one_entry() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<TtsCapability>(
        &mut registry,
        "gtts",
        Construct::Ok,
        Operate::Fail("connection reset"),
        as_tts,
    );
    let config = InMemoryConfigSource::new().with(CapabilityName::Tts, CapabilityConfig::new("gtts"));
    let resolver = ProviderResolver::new(Arc::new(registry), Arc::new(config));

    let err = resolver.text_to_speech("namaste", None).await.unwrap_err();

    assert!(err.to_string().starts_with("All tts providers failed."));
    let attempts = err.attempts().unwrap();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].provider, "gtts");
    assert_eq!(attempts[0].failure().unwrap().class, ErrorClass::Unknown);
}

#[tokio::test]
async fn test_exhausted_history_follows_chain_order() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    for name in ["c", "a", "b"] {
        register_scripted::<AiCapability>(&mut registry, name, Construct::Ok, Operate::Fail("boom"), as_ai);
    }
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("c", vec!["a", "c", "b"]));

    let err = resolver
        .generate_script(&sample_item(), "hinglish")
        .await
        .unwrap_err();

    let tried: Vec<_> = err
        .attempts()
        .unwrap()
        .iter()
        .map(|a| (a.index, a.provider.as_str()))
        .collect();
    assert_eq!(tried, [(0, "c"), (1, "a"), (2, "b")]);
    assert!(err.to_string().contains("Tried 3 candidate(s)"));
}

#[tokio::test]
async fn test_unregistered_primary_falls_back() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("langchain", vec!["groq"]));

    let outcome = resolver
        .generate_script(&sample_item(), "hinglish")
        .await
        .unwrap();

    assert_eq!(outcome.provider, "groq");
    let failure = outcome.attempts[0].failure().unwrap();
    assert_eq!(failure.stage, FailureStage::Lookup);
    assert!(matches!(failure.error, Error::UnknownProvider { .. }));
}

#[tokio::test]
async fn test_unknown_capability_surfaces_immediately() {
    let registry = ProviderRegistry::with_all_capabilities();
    let observer = Arc::new(RecordingObserver::default());
    let resolver = ProviderResolver::new(Arc::new(registry), Arc::new(InMemoryConfigSource::new()))
        .with_observer(observer.clone());

    let err = resolver
        .generate_script(&sample_item(), "hinglish")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownCapability { .. }));
    assert!(observer.events().is_empty());

    let bare = ProviderResolver::new(Arc::new(ProviderRegistry::new()), ai_config("groq", vec![]));
    let err = bare.chain_for(CapabilityName::Ai).unwrap_err();
    assert!(matches!(err, Error::UnknownCapability { .. }));
}

#[tokio::test]
async fn test_cached_instance_is_reused_across_invocations() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    let groq = register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);
    let observer = Arc::new(RecordingObserver::default());
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("groq", vec![]))
        .with_observer(observer.clone());

    script_from(&resolver).await.unwrap();
    script_from(&resolver).await.unwrap();

    assert_eq!(groq.constructions(), 1);
    assert_eq!(groq.calls(), 2);
    let reuse: Vec<bool> = observer
        .events()
        .iter()
        .filter_map(|event| match event {
            ResolutionEvent::AttemptStarted { reused_instance, .. } => Some(*reused_instance),
            _ => None,
        })
        .collect();
    assert_eq!(reuse, [false, true]);
}

#[tokio::test]
async fn test_force_reload_reconstructs_cached_provider() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    let groq = register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("groq", vec![]));
    let item = sample_item();

    script_from(&resolver).await.unwrap();
    resolver
        .invoke_with::<AiCapability, _, _, _>(InvokeOptions::force_reload(), |provider| {
            let item = item.clone();
            async move { provider.generate_script(&item, "hinglish").await }
        })
        .await
        .unwrap();

    assert_eq!(groq.constructions(), 2);
    assert_eq!(resolver.cache().len(), 1);
}

#[tokio::test]
async fn test_invalidate_forces_reconstruction() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    let groq = register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("groq", vec![]));

    script_from(&resolver).await.unwrap();
    assert!(resolver.invalidate(CapabilityName::Ai));
    assert!(resolver.cache().get(CapabilityName::Ai).is_none());
    assert_eq!(resolver.active_provider(CapabilityName::Ai), None);

    script_from(&resolver).await.unwrap();
    assert_eq!(groq.constructions(), 2);
}

#[tokio::test]
async fn test_failed_candidate_is_retried_by_the_next_invocation() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    let groq = register_scripted::<AiCapability>(
        &mut registry,
        "groq",
        Construct::Ok,
        Operate::Fail("rate limit reached"),
        as_ai,
    );
    register_scripted::<AiCapability>(&mut registry, "huggingface", Construct::Ok, Operate::Ok, as_ai);
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("groq", vec!["huggingface"]));

    assert_eq!(script_from(&resolver).await.unwrap(), "huggingface");
    assert_eq!(script_from(&resolver).await.unwrap(), "huggingface");

    assert_eq!(groq.calls(), 2);
}

#[tokio::test]
async fn test_failed_construction_is_never_cached() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);
    register_scripted::<AiCapability>(
        &mut registry,
        "openai",
        Construct::Fail("missing credential"),
        Operate::Ok,
        as_ai,
    );
    let config = ai_config("groq", vec![]);
    let resolver = ProviderResolver::new(Arc::new(registry), config.clone());

    script_from(&resolver).await.unwrap();
    config.set(CapabilityName::Ai, CapabilityConfig::new("openai"));
    script_from(&resolver).await.unwrap_err();

    assert!(resolver.cache().get(CapabilityName::Ai).is_none());
}

#[tokio::test]
async fn test_events_describe_each_transition() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<AiCapability>(&mut registry, "openai", Construct::Fail("no key"), Operate::Ok, as_ai);
    register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);
    let observer = Arc::new(RecordingObserver::default());
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("openai", vec!["groq"]))
        .with_observer(observer.clone());

    script_from(&resolver).await.unwrap();

    let events = observer.events();
    assert_eq!(events.len(), 5);
    assert!(matches!(&events[0], ResolutionEvent::ChainResolved { chain, .. } if chain == &["openai", "groq"]));
    assert!(matches!(
        &events[1],
        ResolutionEvent::AttemptStarted { index: 0, chain_len: 2, reused_instance: false, .. }
    ));
    assert!(matches!(
        &events[2],
        ResolutionEvent::CandidateFailed { index: 0, stage: FailureStage::Construction, class: ErrorClass::Unknown, .. }
    ));
    assert!(matches!(&events[3], ResolutionEvent::AttemptStarted { index: 1, .. }));
    assert!(matches!(
        &events[4],
        ResolutionEvent::CandidateSucceeded { index: 1, role: CandidateRole::Fallback, .. }
    ));
    assert!(events.iter().all(|e| e.capability() == CapabilityName::Ai));
}

#[tokio::test]
async fn test_exhaustion_is_reported_to_observer() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Fail("quota exceeded"), as_ai);
    let observer = Arc::new(RecordingObserver::default());
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("groq", vec![]))
        .with_observer(observer.clone());

    script_from(&resolver).await.unwrap_err();

    let last = observer.events().pop().unwrap();
    assert!(matches!(
        last,
        ResolutionEvent::ChainExhausted { attempts: 1, chain_len: 1, ref last_error, .. } if last_error.contains("quota exceeded")
    ));
}

#[tokio::test(start_paused = true)]
async fn test_deadline_aborts_the_whole_chain() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<AiCapability>(&mut registry, "slow", Construct::Ok, Operate::Hang, as_ai);
    let fallback = register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("slow", vec!["groq"]));
    let item = sample_item();

    let err = resolver
        .invoke_within::<AiCapability, _, _, _>(Duration::from_secs(30), |provider| {
            let item = item.clone();
            async move { provider.generate_script(&item, "hinglish").await }
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::DeadlineExceeded { capability: CapabilityName::Ai, .. }
    ));
    assert_eq!(fallback.constructions(), 0);
}

struct StopOnConstructionFailure;

impl FallbackPolicy for StopOnConstructionFailure {
    fn should_fall_back(&self, failure: &CandidateFailure) -> bool {
        failure.stage != FailureStage::Construction
    }
}

#[tokio::test]
async fn test_policy_can_stop_the_chain() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<AiCapability>(&mut registry, "openai", Construct::Fail("no key"), Operate::Ok, as_ai);
    let groq = register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);
    let observer = Arc::new(RecordingObserver::default());
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("openai", vec!["groq"]))
        .with_policy(Arc::new(StopOnConstructionFailure))
        .with_observer(observer.clone());

    let err = script_from(&resolver).await.unwrap_err();

    assert_eq!(err.attempts().map(<[_]>::len), Some(1));
    assert_eq!(groq.constructions(), 0);
    assert!(matches!(
        observer.events().pop(),
        Some(ResolutionEvent::ChainExhausted { attempts: 1, chain_len: 2, .. })
    ));
}

#[tokio::test]
async fn test_unknown_capability_from_operation_advances_the_chain() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<AiCapability>(&mut registry, "openai", Construct::Ok, Operate::Ok, as_ai);
    register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);
    let observer = Arc::new(RecordingObserver::default());
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("openai", vec!["groq"]))
        .with_observer(observer.clone());

    let outcome = resolver
        .invoke::<AiCapability, _, _, _>(|provider| async move {
            if provider.provider_name() == "openai" {
                Err(Error::unknown_capability("thumbnail"))
            } else {
                Ok(provider.provider_name().to_string())
            }
        })
        .await
        .unwrap();

    assert_eq!(outcome.provider, "groq");
    assert_eq!(outcome.value, "groq");
    assert_eq!(outcome.attempts.len(), 2);
    assert!(observer.events().iter().any(|event| matches!(
        event,
        ResolutionEvent::CandidateFailed { index: 0, stage: FailureStage::Operation, .. }
    )));
}

#[tokio::test]
async fn test_unknown_capability_from_operation_is_kept_in_history() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<AiCapability>(&mut registry, "openai", Construct::Ok, Operate::Ok, as_ai);
    let observer = Arc::new(RecordingObserver::default());
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("openai", vec![]))
        .with_observer(observer.clone());

    let err = resolver
        .invoke::<AiCapability, (), _, _>(|_| async { Err(Error::unknown_capability("thumbnail")) })
        .await
        .unwrap_err();

    assert_eq!(err.attempts().map(<[_]>::len), Some(1));
    assert!(matches!(
        observer.events().pop(),
        Some(ResolutionEvent::ChainExhausted { attempts: 1, chain_len: 1, .. })
    ));
}

#[tokio::test]
async fn test_load_specific_bypasses_chain_and_cache() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    let hf = register_scripted::<AiCapability>(&mut registry, "huggingface", Construct::Ok, Operate::Ok, as_ai);
    let resolver = ProviderResolver::new(Arc::new(registry), ai_config("groq", vec![]));

    let provider = resolver
        .load_specific::<AiCapability>("huggingface")
        .await
        .unwrap();
    assert_eq!(provider.provider_name(), "huggingface");
    assert_eq!(hf.constructions(), 1);
    assert!(resolver.cache().is_empty());

    let err = resolver
        .load_specific::<AiCapability>("langchain")
        .await
        .err()
        .unwrap();
    assert!(matches!(err, Error::UnknownProvider { .. }));
}
