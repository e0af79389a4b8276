//! Reddit Content Provider
//!
//! Reads the public `hot.json` listing of each configured subreddit and keeps
//! posts above an upvote threshold. Fails when nothing qualifies so the
//! resolver can move to a fallback source.
//!
//! Options: `subreddits` (comma-separated), `min_upvotes`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{info, warn};

use reel_application::ports::registry::{
    CONTENT_PROVIDERS, ContentProviderEntry, ProviderConfig, ProviderFuture,
};
use reel_domain::constants::MAX_VIRALITY_SCORE;
use reel_domain::error::{Error, Result};
use reel_domain::ports::ContentProvider;
use reel_domain::value_objects::{ContentItem, ContentKind};

use crate::constants::{
    DEFAULT_HTTP_TIMEOUT, REDDIT_BASE_URL, REDDIT_DEFAULT_MIN_UPVOTES, REDDIT_DEFAULT_SUBREDDITS,
};
use crate::utils::{HttpResponseUtils, JsonExt, build_http_client, request_error};

/// Subreddit listing reader
pub struct RedditProvider {
    http_client: Client,
    base_url: String,
    subreddits: Vec<String>,
    min_upvotes: i64,
}

impl RedditProvider {
    /// Create a provider for `subreddits`
    pub fn new(
        http_client: Client,
        base_url: impl Into<String>,
        subreddits: Vec<String>,
        min_upvotes: i64,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            subreddits,
            min_upvotes,
        }
    }

    /// Build from provider configuration
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let subreddits: Vec<String> = config
            .extra_or("subreddits", REDDIT_DEFAULT_SUBREDDITS)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if subreddits.is_empty() {
            return Err(Error::construction(
                config.capability,
                &config.provider,
                "no subreddits configured",
            ));
        }
        let min_upvotes = config.extra_parsed("min_upvotes", REDDIT_DEFAULT_MIN_UPVOTES)?;
        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or(REDDIT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self::new(
            build_http_client(config, DEFAULT_HTTP_TIMEOUT)?,
            base_url,
            subreddits,
            min_upvotes,
        ))
    }

    /// Virality of a post from its engagement counters
    ///
    /// Upvotes count 40 points per thousand, comments 30 per hundred and
    /// each award 10, capped at the maximum score.
    #[allow(clippy::cast_precision_loss)]
    pub fn score_post(post: &serde_json::Value) -> f64 {
        let ups = post.i64_or("ups", 0) as f64;
        let comments = post.i64_or("num_comments", 0) as f64;
        let awards = post.i64_or("total_awards_received", 0) as f64;
        (ups / 1000.0 * 40.0 + comments / 100.0 * 30.0 + awards * 10.0).min(MAX_VIRALITY_SCORE)
    }

    /// Qualifying posts of one listing payload
    pub fn parse_listing(&self, subreddit: &str, listing: &serde_json::Value) -> Vec<ContentItem> {
        let Some(data) = listing.get("data") else {
            return Vec::new();
        };

        data.items("children")
            .iter()
            .filter_map(|child| child.get("data"))
            .filter(|post| !post.bool_or("stickied", false))
            .filter(|post| post.i64_or("ups", 0) >= self.min_upvotes)
            .filter_map(|post| {
                let id = post.opt_str("id")?;
                let title = post.opt_str("title")?;
                let body = post.opt_str("selftext").unwrap_or(title);
                let mut item = ContentItem::new(
                    format!("reddit_{id}"),
                    ContentKind::Story,
                    title,
                    body,
                    format!("r/{subreddit}"),
                    Self::score_post(post),
                );
                if let Some(created) = post
                    .get("created_utc")
                    .and_then(serde_json::Value::as_f64)
                    .and_then(epoch_to_datetime)
                {
                    item.created_at = created;
                }
                Some(item)
            })
            .collect()
    }

    async fn fetch_subreddit(&self, subreddit: &str, limit: usize) -> Result<Vec<ContentItem>> {
        let url = format!("{}/r/{}/hot.json?limit={}", self.base_url, subreddit, limit.max(1));
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| request_error("reddit", DEFAULT_HTTP_TIMEOUT, &e))?;
        let listing = HttpResponseUtils::check_and_parse(response, "reddit").await?;
        Ok(self.parse_listing(subreddit, &listing))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn epoch_to_datetime(secs: f64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs as i64, 0)
}

#[async_trait]
impl ContentProvider for RedditProvider {
    async fn fetch_content(&self, limit: usize) -> Result<Vec<ContentItem>> {
        info!("Fetching content from Reddit: {}", self.subreddits.join(", "));
        let mut items = Vec::new();
        let mut last_error = None;

        for subreddit in &self.subreddits {
            if items.len() >= limit {
                break;
            }
            match self.fetch_subreddit(subreddit, limit).await {
                Ok(posts) => items.extend(posts),
                Err(e) => {
                    warn!("Error fetching from r/{}: {}", subreddit, e);
                    last_error = Some(e);
                }
            }
        }

        if items.is_empty() && limit > 0 {
            return Err(last_error.unwrap_or_else(|| {
                Error::provider(
                    "reddit",
                    format!("no posts with at least {} upvotes", self.min_upvotes),
                )
            }));
        }

        items.truncate(limit);
        info!("Fetched {} items from Reddit", items.len());
        Ok(items)
    }

    async fn score_virality(&self, item: &ContentItem) -> Result<f64> {
        Ok(item.score.clamp(0.0, MAX_VIRALITY_SCORE))
    }

    fn provider_name(&self) -> &str {
        "reddit"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn reddit_factory(config: &ProviderConfig) -> ProviderFuture<dyn ContentProvider> {
    let config = config.clone();
    Box::pin(async move {
        let provider: Arc<dyn ContentProvider> = Arc::new(RedditProvider::from_config(&config)?);
        Ok(provider)
    })
}

#[linkme::distributed_slice(CONTENT_PROVIDERS)]
static REDDIT_PROVIDER: ContentProviderEntry = ContentProviderEntry {
    name: "reddit",
    description: "Hot posts from public subreddit listings",
    factory: reddit_factory,
};
