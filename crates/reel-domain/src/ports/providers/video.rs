//! Video assembly port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{MediaFile, VideoRequest};

/// Assembles narration, background and captions into a video
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Render the final video
    async fn assemble_video(&self, request: &VideoRequest) -> Result<MediaFile>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}
