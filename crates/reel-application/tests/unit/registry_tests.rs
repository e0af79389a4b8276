//! Tests for the provider registry

use reel_application::ports::registry::{ProviderConfig, ProviderRegistry};
use reel_domain::error::Error;
use reel_domain::ports::{AiCapability, ProviderInstance, TtsCapability};
use reel_domain::value_objects::CapabilityName;

use crate::support::{Construct, Operate, as_ai, as_tts, register_scripted};

#[test]
fn test_linked_registry_has_every_capability() {
    let registry = ProviderRegistry::from_linked();
    for capability in CapabilityName::ALL {
        assert!(registry.contains_capability(capability));
    }
}

#[test]
fn test_namespaces_are_per_capability() {
    let mut registry = ProviderRegistry::new();
    register_scripted::<AiCapability>(&mut registry, "shared", Construct::Ok, Operate::Ok, as_ai);

    assert!(registry.resolve_descriptor(CapabilityName::Ai, "shared").is_ok());
    let err = registry
        .resolve_descriptor(CapabilityName::Tts, "shared")
        .unwrap_err();
    assert!(matches!(err, Error::UnknownCapability { .. }));

    register_scripted::<TtsCapability>(&mut registry, "shared", Construct::Ok, Operate::Ok, as_tts);
    let descriptor = registry
        .resolve_descriptor(CapabilityName::Tts, "shared")
        .unwrap();
    assert_eq!(descriptor.capability(), CapabilityName::Tts);
}

#[test]
fn test_unknown_provider_lists_available_names() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);
    register_scripted::<AiCapability>(&mut registry, "huggingface", Construct::Ok, Operate::Ok, as_ai);

    let err = registry
        .resolve_descriptor_by_name("ai", "claude")
        .unwrap_err();
    match err {
        Error::UnknownProvider {
            capability,
            provider,
            available,
        } => {
            assert_eq!(capability, CapabilityName::Ai);
            assert_eq!(provider, "claude");
            assert_eq!(available, ["groq", "huggingface"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_list_is_ordered_by_name() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<AiCapability>(&mut registry, "openai_direct", Construct::Ok, Operate::Ok, as_ai);
    register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);

    let names: Vec<_> = registry
        .list(CapabilityName::Ai)
        .iter()
        .map(|d| d.name())
        .collect();
    assert_eq!(names, ["groq", "openai_direct"]);
    assert_eq!(registry.names(CapabilityName::Ai), ["groq", "openai_direct"]);
    assert!(registry.list(CapabilityName::Video).is_empty());
}

#[tokio::test]
async fn test_descriptor_constructs_instance_of_its_capability() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    let counters =
        register_scripted::<AiCapability>(&mut registry, "groq", Construct::Ok, Operate::Ok, as_ai);

    let descriptor = registry.resolve_descriptor(CapabilityName::Ai, "groq").unwrap();
    let instance = descriptor
        .construct(ProviderConfig::new(CapabilityName::Ai, "groq"))
        .await
        .unwrap();

    assert!(matches!(instance, ProviderInstance::Ai(_)));
    assert_eq!(instance.provider_name(), "groq");
    assert_eq!(counters.constructions(), 1);
}

#[tokio::test]
async fn test_failing_factory_reports_construction_error() {
    let mut registry = ProviderRegistry::with_all_capabilities();
    register_scripted::<AiCapability>(
        &mut registry,
        "openai_direct",
        Construct::Fail("OPENAI_API_KEY not found"),
        Operate::Ok,
        as_ai,
    );

    let descriptor = registry
        .resolve_descriptor(CapabilityName::Ai, "openai_direct")
        .unwrap();
    let err = descriptor
        .construct(ProviderConfig::new(CapabilityName::Ai, "openai_direct"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ProviderConstruction { .. }));
}
