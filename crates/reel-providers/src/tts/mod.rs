//! Text-to-Speech Provider Implementations
//!
//! | Provider | Service | Credentials |
//! |----------|---------|-------------|
//! | `gtts` | Google Translate speech endpoint | none |
//! | `elevenlabs` | ElevenLabs REST API | `ELEVENLABS_API_KEY` |

pub mod elevenlabs;
pub mod gtts;

pub use elevenlabs::ElevenLabsTtsProvider;
pub use gtts::GttsProvider;

use std::path::{Path, PathBuf};

use reel_domain::error::{Error, Result};

/// Resolve the output path and make sure its directory exists
async fn prepare_output(requested: Option<&Path>, default: PathBuf) -> Result<PathBuf> {
    let path = requested.map_or(default, Path::to_path_buf);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            Error::io_with_source(format!("Failed to create {}", parent.display()), e)
        })?;
    }
    Ok(path)
}

/// Write synthesized audio to `path`
async fn write_audio(path: &Path, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| Error::io_with_source(format!("Failed to write {}", path.display()), e))
}
