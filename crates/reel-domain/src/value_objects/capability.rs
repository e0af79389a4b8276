//! Capability names
//!
//! The closed set of operation categories the pipeline is built from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifier of one pipeline capability
///
/// Every capability owns its own provider namespace: the same provider name
/// may appear under two capabilities with unrelated meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityName {
    /// Source content acquisition
    Content,
    /// Script generation
    Ai,
    /// Text-to-speech synthesis
    Tts,
    /// Video assembly
    Video,
    /// Publishing the finished video
    Upload,
    /// Persistence of pipeline records
    Database,
}

impl CapabilityName {
    /// All capabilities, in pipeline order
    pub const ALL: [CapabilityName; 6] = [
        Self::Content,
        Self::Ai,
        Self::Tts,
        Self::Video,
        Self::Upload,
        Self::Database,
    ];

    /// Configuration key of this capability
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Ai => "ai",
            Self::Tts => "tts",
            Self::Video => "video",
            Self::Upload => "upload",
            Self::Database => "database",
        }
    }
}

impl fmt::Display for CapabilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapabilityName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| Error::unknown_capability(s))
    }
}
