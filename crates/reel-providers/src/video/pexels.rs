//! Pexels Background Videos
//!
//! Portrait stock clips used as the moving background of assembled shorts.
//! A random category is searched, a random clip picked, and its download
//! cached by clip id. Callers fall back to the gradient on any error.

use std::path::{Path, PathBuf};

use rand::seq::IndexedRandom;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::info;

use reel_application::ports::registry::ProviderConfig;
use reel_domain::error::{Error, Result};

use crate::constants::{
    BACKGROUND_CACHE_SUBDIR, BACKGROUND_SOURCE_PEXELS, PEXELS_API_KEY_VAR, PEXELS_BASE_URL,
    PEXELS_DEFAULT_CATEGORIES, PEXELS_MAX_HEIGHT, PEXELS_MIN_DURATION_SECS, PEXELS_MIN_HEIGHT,
    PEXELS_PER_PAGE, TRANSFER_HTTP_TIMEOUT,
};
use crate::utils::{HttpResponseUtils, JsonExt, build_http_client, request_error};

const SOURCE_NAME: &str = "pexels";

/// One downloadable rendition of a stock clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PexelsClip {
    /// Pexels video id
    pub id: i64,
    /// Clip length in seconds
    pub duration_secs: i64,
    /// Download URL of the chosen rendition
    pub link: String,
    pub width: i64,
    pub height: i64,
}

/// Clips of a search payload lasting at least `min_duration_secs`
///
/// When no clip is long enough every clip qualifies; it is looped anyway.
/// Videos without a downloadable file are skipped.
pub fn parse_search(payload: &Value, min_duration_secs: i64) -> Vec<PexelsClip> {
    let clips: Vec<PexelsClip> = payload
        .items("videos")
        .iter()
        .filter_map(parse_video)
        .collect();
    let long_enough: Vec<PexelsClip> = clips
        .iter()
        .filter(|clip| clip.duration_secs >= min_duration_secs)
        .cloned()
        .collect();
    if long_enough.is_empty() {
        clips
    } else {
        long_enough
    }
}

/// First rendition between 720 and 1080 pixels high, else the first one
fn parse_video(video: &Value) -> Option<PexelsClip> {
    let id = video.get("id").and_then(Value::as_i64)?;
    let files = video.items("video_files");
    let file = files
        .iter()
        .find(|file| (PEXELS_MIN_HEIGHT..=PEXELS_MAX_HEIGHT).contains(&file.i64_or("height", 0)))
        .or_else(|| files.first())?;

    Some(PexelsClip {
        id,
        duration_secs: video.i64_or("duration", 0),
        link: file.opt_str("link")?.to_string(),
        width: file.i64_or("width", 0),
        height: file.i64_or("height", 0),
    })
}

/// Pexels video search with a download cache
#[derive(Clone)]
pub struct PexelsBackgrounds {
    http_client: Client,
    api_key: String,
    base_url: String,
    categories: Vec<String>,
    cache_dir: PathBuf,
}

impl PexelsBackgrounds {
    /// Create a client searching `categories` and caching into `cache_dir`
    pub fn new(
        http_client: Client,
        api_key: impl Into<String>,
        categories: Vec<String>,
        cache_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            base_url: PEXELS_BASE_URL.to_string(),
            categories,
            cache_dir: cache_dir.into(),
        }
    }

    /// Build from the video provider's configuration
    ///
    /// `None` when `background_source` is not `pexels` or no key is found in
    /// the `pexels_api_key` option, the provider key, or `PEXELS_API_KEY`.
    /// Options: `background_categories` (comma-separated),
    /// `background_cache_dir`, `pexels_base_url`.
    pub fn from_config(config: &ProviderConfig) -> Result<Option<Self>> {
        let source = config.extra_or("background_source", BACKGROUND_SOURCE_PEXELS);
        if !source.trim().eq_ignore_ascii_case(BACKGROUND_SOURCE_PEXELS) {
            return Ok(None);
        }
        let Some(api_key) = config
            .extra
            .get("pexels_api_key")
            .cloned()
            .or_else(|| config.api_key.clone())
            .or_else(|| std::env::var(PEXELS_API_KEY_VAR).ok())
            .filter(|key| !key.trim().is_empty())
        else {
            info!("{PEXELS_API_KEY_VAR} not set; videos use gradient backgrounds");
            return Ok(None);
        };

        let categories: Vec<String> = config
            .extra_or("background_categories", PEXELS_DEFAULT_CATEGORIES)
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        let cache_dir = config
            .extra
            .get("background_cache_dir")
            .map_or_else(|| config.output_dir.join(BACKGROUND_CACHE_SUBDIR), PathBuf::from);

        let mut backgrounds = Self::new(
            build_http_client(config, TRANSFER_HTTP_TIMEOUT)?,
            api_key,
            categories,
            cache_dir,
        );
        if let Some(base_url) = config.extra.get("pexels_base_url") {
            backgrounds.base_url = base_url.trim_end_matches('/').to_string();
        }
        Ok(Some(backgrounds))
    }

    /// Directory downloads are cached in
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Search categories
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Cache location of clip `id`
    pub fn cache_path(&self, id: i64) -> PathBuf {
        self.cache_dir.join(format!("pexels_{id}.mp4"))
    }

    /// Search a random category and return the local path of a portrait clip
    pub async fn fetch_background(&self) -> Result<PathBuf> {
        let query = self
            .categories
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| Error::provider(SOURCE_NAME, "no background categories configured"))?;
        info!("Fetching Pexels background (query: {query})");

        let url = Url::parse_with_params(
            &format!("{}/videos/search", self.base_url),
            &[
                ("query", query.as_str()),
                ("orientation", "portrait"),
                ("size", "medium"),
                ("per_page", PEXELS_PER_PAGE),
            ],
        )
        .map_err(|e| Error::provider(SOURCE_NAME, format!("invalid search URL: {e}")))?;
        let response = self
            .http_client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .send()
            .await
            .map_err(|e| request_error(SOURCE_NAME, TRANSFER_HTTP_TIMEOUT, &e))?;
        let payload = HttpResponseUtils::check_and_parse(response, SOURCE_NAME).await?;

        let clip = parse_search(&payload, PEXELS_MIN_DURATION_SECS)
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| Error::provider(SOURCE_NAME, format!("no videos found for '{query}'")))?;

        let path = self.cache_path(clip.id);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            info!("Using cached background {}", path.display());
            return Ok(path);
        }

        tokio::fs::create_dir_all(&self.cache_dir).await.map_err(|e| {
            Error::io_with_source(format!("Failed to create {}", self.cache_dir.display()), e)
        })?;
        let response = self
            .http_client
            .get(&clip.link)
            .send()
            .await
            .map_err(|e| request_error(SOURCE_NAME, TRANSFER_HTTP_TIMEOUT, &e))?;
        let bytes = HttpResponseUtils::check_and_read(response, SOURCE_NAME).await?;
        tokio::fs::write(&path, &bytes).await.map_err(|e| {
            Error::io_with_source(format!("Failed to write {}", path.display()), e)
        })?;

        info!(
            "Downloaded background {} ({}x{}, {}s)",
            path.display(),
            clip.width,
            clip.height,
            clip.duration_secs
        );
        Ok(path)
    }
}
