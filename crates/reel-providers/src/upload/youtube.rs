//! YouTube Upload Provider
//!
//! Publishes shorts through the YouTube Data API v3 resumable upload
//! protocol: one request opens an upload session, a second sends the file.
//! Requires an OAuth access token with the `youtube.upload` scope.
//!
//! Options: `privacy` (`private`, `unlisted`, `public`), `category_id`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::LOCATION;
use serde_json::json;
use tracing::info;

use reel_application::ports::registry::{ProviderConfig, ProviderFuture, UPLOAD_PROVIDERS, UploadProviderEntry};
use reel_domain::error::{Error, Result};
use reel_domain::ports::UploadProvider;
use reel_domain::value_objects::{UploadReceipt, UploadRequest};

use crate::constants::{
    CONTENT_TYPE_JSON, TRANSFER_HTTP_TIMEOUT, YOUTUBE_DEFAULT_CATEGORY, YOUTUBE_DEFAULT_PRIVACY,
    YOUTUBE_SHORTS_URL, YOUTUBE_UPLOAD_URL,
};
use crate::utils::text::truncate_chars;
use crate::utils::{HttpResponseUtils, JsonExt, build_http_client, request_error};

const PROVIDER_NAME: &str = "youtube";

const TITLE_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 5000;
const SHORTS_TAG: &str = "#Shorts";
const PRIVACY_STATUSES: [&str; 3] = ["private", "unlisted", "public"];

/// YouTube Data API upload provider
pub struct YouTubeUploadProvider {
    http_client: Client,
    upload_url: String,
    access_token: String,
    privacy: String,
    category_id: String,
}

impl YouTubeUploadProvider {
    /// Build from provider configuration; requires `YOUTUBE_ACCESS_TOKEN`
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let access_token = config.require_api_key("YOUTUBE_ACCESS_TOKEN")?.trim().to_string();
        let privacy = config.extra_or("privacy", YOUTUBE_DEFAULT_PRIVACY).to_ascii_lowercase();
        if !PRIVACY_STATUSES.contains(&privacy.as_str()) {
            return Err(Error::construction(
                config.capability,
                &config.provider,
                format!("invalid privacy '{privacy}', expected one of {PRIVACY_STATUSES:?}"),
            ));
        }

        Ok(Self {
            http_client: build_http_client(config, TRANSFER_HTTP_TIMEOUT)?,
            upload_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| YOUTUBE_UPLOAD_URL.to_string()),
            access_token,
            privacy,
            category_id: config.extra_or("category_id", YOUTUBE_DEFAULT_CATEGORY).to_string(),
        })
    }

    /// Video resource sent when opening the upload session
    pub fn video_resource(&self, request: &UploadRequest) -> serde_json::Value {
        let title = if request.title.contains(SHORTS_TAG) {
            request.title.clone()
        } else {
            format!("{} {SHORTS_TAG}", request.title.trim())
        };

        json!({
            "snippet": {
                "title": truncate_chars(&title, TITLE_MAX_CHARS),
                "description": truncate_chars(&request.description, DESCRIPTION_MAX_CHARS),
                "tags": request.tags,
                "categoryId": self.category_id,
            },
            "status": {
                "privacyStatus": self.privacy,
                "selfDeclaredMadeForKids": false,
            }
        })
    }

    async fn open_session(&self, request: &UploadRequest, length: usize) -> Result<String> {
        let response = self
            .http_client
            .post(&self.upload_url)
            .bearer_auth(&self.access_token)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("X-Upload-Content-Type", "video/mp4")
            .header("X-Upload-Content-Length", length.to_string())
            .json(&self.video_resource(request))
            .send()
            .await
            .map_err(|e| request_error(PROVIDER_NAME, TRANSFER_HTTP_TIMEOUT, &e))?;
        let response = HttpResponseUtils::check_status(response, PROVIDER_NAME).await?;

        response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| Error::provider(PROVIDER_NAME, "upload session has no Location header"))
    }
}

#[async_trait]
impl UploadProvider for YouTubeUploadProvider {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadReceipt> {
        info!("Uploading {} to YouTube ({})", request.video_path.display(), self.privacy);
        let video = tokio::fs::read(&request.video_path).await.map_err(|e| {
            Error::io_with_source(format!("Failed to read {}", request.video_path.display()), e)
        })?;

        let session = self.open_session(request, video.len()).await?;
        let response = self
            .http_client
            .put(&session)
            .bearer_auth(&self.access_token)
            .header("Content-Type", "video/mp4")
            .body(video)
            .send()
            .await
            .map_err(|e| request_error(PROVIDER_NAME, TRANSFER_HTTP_TIMEOUT, &e))?;
        let data = HttpResponseUtils::check_and_parse(response, PROVIDER_NAME).await?;

        let id = data
            .opt_str("id")
            .ok_or_else(|| Error::provider(PROVIDER_NAME, "upload response has no video id"))?
            .to_string();
        info!("Uploaded to YouTube: {}", id);

        Ok(UploadReceipt {
            url: format!("{YOUTUBE_SHORTS_URL}/{id}"),
            status: data
                .get("status")
                .map_or("uploaded", |s| s.str_or("uploadStatus", "uploaded"))
                .to_string(),
            id,
        })
    }

    fn platform_name(&self) -> &str {
        "YouTube"
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn youtube_factory(config: &ProviderConfig) -> ProviderFuture<dyn UploadProvider> {
    let config = config.clone();
    Box::pin(async move {
        let provider: Arc<dyn UploadProvider> = Arc::new(YouTubeUploadProvider::from_config(&config)?);
        Ok(provider)
    })
}

#[linkme::distributed_slice(UPLOAD_PROVIDERS)]
static YOUTUBE_PROVIDER: UploadProviderEntry = UploadProviderEntry {
    name: PROVIDER_NAME,
    description: "YouTube Shorts via the Data API v3 resumable upload",
    factory: youtube_factory,
};
