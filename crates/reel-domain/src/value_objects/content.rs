//! Content and script value objects

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of source content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Narrative post (e.g. a reddit submission)
    Story,
    /// Short quotation
    Quote,
    /// Trivia fact
    Fact,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Story => f.write_str("story"),
            Self::Quote => f.write_str("quote"),
            Self::Fact => f.write_str("fact"),
        }
    }
}

/// A piece of source content a video is made from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Stable identifier
    pub id: String,
    /// Kind of content
    pub kind: ContentKind,
    /// Short title
    pub title: String,
    /// Full text
    pub body: String,
    /// Human-readable origin
    pub source: String,
    /// Virality score (0-100)
    pub score: f64,
    /// When the item was fetched
    pub created_at: DateTime<Utc>,
}

impl ContentItem {
    /// Create an item stamped with the current time
    pub fn new(
        id: impl Into<String>,
        kind: ContentKind,
        title: impl Into<String>,
        body: impl Into<String>,
        source: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            body: body.into(),
            source: source.into(),
            score,
            created_at: Utc::now(),
        }
    }
}

/// Script produced by an AI provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptResult {
    /// Opening line (first seconds of the video)
    pub hook: String,
    /// Main narration
    pub body: String,
    /// Closing call to action
    pub cta: String,
    /// Narration as spoken, sections joined
    pub full_script: String,
    /// Provider that generated the script
    pub provider: String,
    /// Provider-specific details (model, token usage, ...)
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl ScriptResult {
    /// Assemble a script from its sections
    pub fn from_sections(
        hook: impl Into<String>,
        body: impl Into<String>,
        cta: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        let hook = hook.into();
        let body = body.into();
        let cta = cta.into();
        let full_script = format!("{hook}\n\n{body}\n\n{cta}");
        Self {
            hook,
            body,
            cta,
            full_script,
            provider: provider.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
