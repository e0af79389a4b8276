//! Error classifier
//!
//! Labels candidate failures for observers. Classification does not change
//! whether the chain advances; that decision belongs to the `FallbackPolicy`.

use std::error::Error as StdError;

use reel_domain::error::Error;
use reel_domain::value_objects::ErrorClass;

/// Case-insensitive substrings that identify quota and rate-limit failures
pub const QUOTA_PATTERNS: &[&str] = &[
    "quota",
    "rate limit",
    "rate_limit",
    "ratelimit",
    "429",
    "too many requests",
    "resource exhausted",
    "resource_exhausted",
    "exceeded",
];

/// Labels an error as transient or unknown
pub trait ErrorClassifier: Send + Sync {
    /// Classify `error`; must not panic
    fn classify(&self, error: &Error) -> ErrorClass;
}

/// Classifier matching the rendered error chain against fixed patterns
#[derive(Debug, Clone)]
pub struct QuotaPatternClassifier {
    patterns: Vec<String>,
}

impl QuotaPatternClassifier {
    /// Classifier with custom patterns
    pub fn with_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Classifier with the default patterns plus `extra`
    pub fn with_extra_patterns<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classifier = Self::default();
        for pattern in extra {
            let pattern = pattern.as_ref().to_lowercase();
            if !pattern.is_empty() && !classifier.patterns.contains(&pattern) {
                classifier.patterns.push(pattern);
            }
        }
        classifier
    }

    /// Classify a bare message
    pub fn classify_str(&self, message: &str) -> ErrorClass {
        let message = message.to_lowercase();
        if self.patterns.iter().any(|p| message.contains(p.as_str())) {
            ErrorClass::Transient
        } else {
            ErrorClass::Unknown
        }
    }
}

impl Default for QuotaPatternClassifier {
    fn default() -> Self {
        Self::with_patterns(QUOTA_PATTERNS)
    }
}

impl ErrorClassifier for QuotaPatternClassifier {
    fn classify(&self, error: &Error) -> ErrorClass {
        let mut rendered = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            rendered.push_str(": ");
            rendered.push_str(&cause.to_string());
            source = cause.source();
        }
        self.classify_str(&rendered)
    }
}

/// Classify `message` with the default quota patterns
pub fn classify_message(message: &str) -> ErrorClass {
    QuotaPatternClassifier::default().classify_str(message)
}
