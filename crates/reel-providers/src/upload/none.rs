//! Local-only upload provider
//!
//! Skips publishing and reports the local file as the video's location.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use reel_application::ports::registry::{ProviderConfig, ProviderFuture, UPLOAD_PROVIDERS, UploadProviderEntry};
use reel_domain::error::Result;
use reel_domain::ports::UploadProvider;
use reel_domain::value_objects::{UploadReceipt, UploadRequest};

use crate::utils::text::short_hash;

/// Upload provider that keeps the video local
#[derive(Debug, Default, Clone, Copy)]
pub struct NoUploadProvider;

#[async_trait]
impl UploadProvider for NoUploadProvider {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadReceipt> {
        let path = request.video_path.display().to_string();
        info!("Upload skipped, video kept at {}", path);
        Ok(UploadReceipt {
            id: format!("local_{}", short_hash(&path)),
            url: path,
            status: "skipped".to_string(),
        })
    }

    fn platform_name(&self) -> &str {
        "local"
    }

    fn provider_name(&self) -> &str {
        "none"
    }
}

fn none_factory(_config: &ProviderConfig) -> ProviderFuture<dyn UploadProvider> {
    Box::pin(async move {
        let provider: Arc<dyn UploadProvider> = Arc::new(NoUploadProvider);
        Ok(provider)
    })
}

#[linkme::distributed_slice(UPLOAD_PROVIDERS)]
static NONE_PROVIDER: UploadProviderEntry = UploadProviderEntry {
    name: "none",
    description: "Skip upload and keep the video on disk",
    factory: none_factory,
};
