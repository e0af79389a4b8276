//! Output configuration types

use std::path::PathBuf;

use reel_domain::constants::DEFAULT_OUTPUT_DIR;
use serde::{Deserialize, Serialize};

/// Where generated files go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory for audio, video and the SQLite file
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
