//! Tests for error classification

use std::io;

use reel_application::resolution::{ErrorClassifier, QuotaPatternClassifier, classify_message};
use reel_domain::error::Error;
use reel_domain::value_objects::{CapabilityName, ErrorClass};

#[test]
fn test_quota_signatures_are_transient() {
    for message in [
        "429 Too Many Requests",
        "Rate limit reached for model",
        "RATE LIMIT",
        "You exceeded your current quota",
        "RESOURCE_EXHAUSTED: try again later",
        "Resource exhausted",
    ] {
        assert_eq!(classify_message(message), ErrorClass::Transient, "{message}");
    }
}

#[test]
fn test_unrelated_messages_are_unknown() {
    for message in ["connection refused", "invalid api key", "", "404 Not Found"] {
        assert_eq!(classify_message(message), ErrorClass::Unknown, "{message}");
    }
}

#[test]
fn test_classifier_inspects_error_sources() {
    let error = Error::provider_with_source(
        "groq",
        "request failed",
        io::Error::other("upstream says: quota exhausted"),
    );
    assert_eq!(
        QuotaPatternClassifier::default().classify(&error),
        ErrorClass::Transient
    );
}

#[test]
fn test_construction_errors_are_unknown() {
    let error = Error::missing_credential(CapabilityName::Ai, "openai_direct", "OPENAI_API_KEY");
    assert_eq!(
        QuotaPatternClassifier::default().classify(&error),
        ErrorClass::Unknown
    );
}

#[test]
fn test_custom_patterns() {
    let classifier = QuotaPatternClassifier::with_patterns(["Overloaded"]);
    assert_eq!(classifier.classify_str("server overloaded"), ErrorClass::Transient);
    assert_eq!(classifier.classify_str("429"), ErrorClass::Unknown);
}

#[test]
fn test_extra_patterns_keep_builtin_set() {
    let classifier = QuotaPatternClassifier::with_extra_patterns(["Overloaded", ""]);
    assert_eq!(classifier.classify_str("server overloaded"), ErrorClass::Transient);
    assert_eq!(classifier.classify_str("429 Too Many Requests"), ErrorClass::Transient);

    let none: [&str; 0] = [];
    let classifier = QuotaPatternClassifier::with_extra_patterns(none);
    assert_eq!(classifier.classify_str("Rate limit reached"), ErrorClass::Transient);
    assert_eq!(classifier.classify_str("invalid api key"), ErrorClass::Unknown);
}
