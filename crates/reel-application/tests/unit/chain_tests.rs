//! Tests for resolution chain construction

use reel_application::resolution::ResolutionChain;
use reel_domain::value_objects::{CapabilityConfig, FallbackSpec};

fn chain(primary: &str, fallback: Option<FallbackSpec>) -> Vec<String> {
    ResolutionChain::build(primary, fallback.as_ref())
        .candidates()
        .to_vec()
}

#[test]
fn test_primary_then_fallbacks_in_order() {
    assert_eq!(
        chain(
            "openai_direct",
            Some(vec!["groq", "huggingface"].into())
        ),
        ["openai_direct", "groq", "huggingface"]
    );
}

#[test]
fn test_primary_in_fallback_list_is_skipped() {
    assert_eq!(
        chain("groq", Some(vec!["huggingface", "groq", "openai_direct"].into())),
        ["groq", "huggingface", "openai_direct"]
    );
}

#[test]
fn test_duplicate_fallbacks_keep_first_occurrence() {
    assert_eq!(
        chain("a", Some(vec!["b", "c", "b", "a", "c", "d"].into())),
        ["a", "b", "c", "d"]
    );
}

#[test]
fn test_scalar_fallback_is_one_element_list() {
    assert_eq!(chain("reddit", Some("quotes".into())), ["reddit", "quotes"]);
}

#[test]
fn test_empty_or_absent_fallback_is_primary_only() {
    assert_eq!(chain("gtts", None), ["gtts"]);
    assert_eq!(chain("gtts", Some(FallbackSpec::Many(Vec::new()))), ["gtts"]);
    assert_eq!(chain("gtts", Some("".into())), ["gtts"]);
}

#[test]
fn test_fallback_equal_to_primary_yields_primary_only() {
    assert_eq!(chain("sqlite", Some("sqlite".into())), ["sqlite"]);
}

#[test]
fn test_unregistered_primary_is_kept() {
    let chain = ResolutionChain::build("does_not_exist", Some(&"quotes".into()));
    assert_eq!(chain.primary(), "does_not_exist");
    assert_eq!(chain.len(), 2);
    assert!(!chain.is_empty());
}

#[test]
fn test_chain_from_capability_config() {
    let config = CapabilityConfig::new("reddit").with_fallback("quotes");
    let chain = ResolutionChain::from_config(&config);
    assert_eq!(chain.iter().collect::<Vec<_>>(), ["reddit", "quotes"]);
}
