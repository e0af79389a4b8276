//! Tests for linkme auto-registration of the bundled providers

use reel_application::ports::ProviderRegistry;
use reel_application::ports::registry::{
    list_ai_providers, list_content_providers, list_database_providers, list_tts_providers,
    list_upload_providers, list_video_providers,
};
use reel_domain::value_objects::CapabilityName;

fn names(entries: &[(&'static str, &'static str)]) -> Vec<&'static str> {
    let mut names: Vec<_> = entries.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names
}

#[test]
fn test_every_capability_has_its_providers() {
    assert_eq!(names(&list_content_providers()), vec!["facts", "quotes", "reddit"]);
    assert_eq!(names(&list_ai_providers()), vec!["groq", "huggingface", "openai_direct"]);
    assert_eq!(names(&list_tts_providers()), vec!["elevenlabs", "gtts"]);
    assert_eq!(names(&list_video_providers()), vec!["ffmpeg"]);
    assert_eq!(names(&list_upload_providers()), vec!["none", "youtube"]);
    assert_eq!(names(&list_database_providers()), vec!["memory", "sqlite", "supabase"]);
}

#[test]
fn test_descriptions_are_not_empty() {
    for (name, description) in list_ai_providers()
        .into_iter()
        .chain(list_tts_providers())
        .chain(list_database_providers())
    {
        assert!(!description.is_empty(), "{name} has no description");
    }
}

#[test]
fn test_linked_registry_resolves_bundled_names() {
    let registry = ProviderRegistry::from_linked();
    for capability in CapabilityName::ALL {
        assert!(registry.contains_capability(capability));
        assert!(!registry.names(capability).is_empty(), "{capability} has no providers");
    }
    assert!(registry.resolve_descriptor(CapabilityName::Ai, "groq").is_ok());
    assert!(registry.resolve_descriptor(CapabilityName::Ai, "gtts").is_err());
}
