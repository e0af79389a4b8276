//! Upload port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{UploadReceipt, UploadRequest};

/// Publishes a finished video
#[async_trait]
pub trait UploadProvider: Send + Sync {
    /// Upload the video described by `request`
    async fn upload(&self, request: &UploadRequest) -> Result<UploadReceipt>;

    /// Human-readable platform name
    fn platform_name(&self) -> &str;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}
