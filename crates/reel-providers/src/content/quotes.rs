//! Quotes Content Provider
//!
//! Fetches motivational quotes from public quote APIs and tops the result up
//! with curated Hinglish quotes when the APIs fail or return too few.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use reel_application::ports::registry::{
    CONTENT_PROVIDERS, ContentProviderEntry, ProviderConfig, ProviderFuture,
};
use reel_domain::constants::MAX_VIRALITY_SCORE;
use reel_domain::error::Result;
use reel_domain::ports::ContentProvider;
use reel_domain::value_objects::{ContentItem, ContentKind};

use super::sample_curated;
use crate::constants::{
    CURATED_QUOTE_SCORE, CURATED_QUOTES_SOURCE, QUOTABLE_RANDOM_URL, TITLE_MAX_CHARS,
    ZENQUOTES_RANDOM_URL,
};
use crate::utils::text::{short_hash, truncate_chars};
use crate::utils::{HttpResponseUtils, JsonExt, build_http_client, request_error};

/// Curated Hinglish quotes for an Indian audience
pub const HINGLISH_QUOTES: [&str; 10] = [
    "Sapne woh nahi jo neend mein aaye, sapne woh hain jo neend ude de.",
    "Koshish karne walon ki kabhi haar nahi hoti.",
    "Haar kar jeetne wale ko hi baazigar kehte hain.",
    "Mushkil waqt mein sabse bada support aapka hausla hai.",
    "Success ka shortcut sirf hardwork hai.",
    "Apni galtiyon se seekho aur aage badho.",
    "Confidence aur patience success ki key hain.",
    "Apne goals par focus karo, baaki sab automatically hoga.",
    "Life mein risk lena zaroori hai, tabhi aage badhoge.",
    "Positive soch rakhoge toh zindagi asaan ho jayegi.",
];

const POWER_WORDS: [&str; 9] = [
    "success", "dream", "life", "love", "change", "believe", "sapne", "koshish", "jeet",
];

const QUOTE_API_TIMEOUT: Duration = Duration::from_secs(5);

/// Quote fetcher with curated fallback
pub struct QuotesProvider {
    http_client: Client,
    apis: Vec<String>,
}

impl QuotesProvider {
    /// Create a provider reading from `apis` in order
    pub fn new(http_client: Client, apis: Vec<String>) -> Self {
        Self { http_client, apis }
    }

    /// Build from provider configuration
    ///
    /// A configured `base_url` replaces the default API list.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let apis = match &config.base_url {
            Some(url) => vec![url.trim().to_string()],
            None => vec![
                QUOTABLE_RANDOM_URL.to_string(),
                ZENQUOTES_RANDOM_URL.to_string(),
            ],
        };
        Ok(Self::new(build_http_client(config, QUOTE_API_TIMEOUT)?, apis))
    }

    /// Score a quote by length and keywords
    pub fn score_text(quote: &str) -> f64 {
        let length = quote.chars().count();
        let mut score: f64 = 60.0;
        if length < 100 {
            score += 20.0;
        } else if length < 150 {
            score += 10.0;
        }

        let lowered = quote.to_lowercase();
        for word in POWER_WORDS {
            if lowered.contains(word) {
                score += 5.0;
            }
        }
        score.min(MAX_VIRALITY_SCORE)
    }

    /// Turn a quote API payload into an item
    ///
    /// Accepts the quotable (`content`/`author`) and zenquotes (`q`/`a`,
    /// wrapped in an array) shapes.
    pub fn parse_quote(payload: &serde_json::Value) -> Option<ContentItem> {
        let data = payload.as_array().and_then(|a| a.first()).unwrap_or(payload);
        let text = data
            .opt_str("content")
            .or_else(|| data.opt_str("q"))
            .or_else(|| data.opt_str("quote"))?;
        let author = data
            .opt_str("author")
            .or_else(|| data.opt_str("a"))
            .unwrap_or("Unknown");

        Some(ContentItem::new(
            format!("quote_{}", short_hash(text)),
            ContentKind::Quote,
            format!("{}...", truncate_chars(text, TITLE_MAX_CHARS)),
            text,
            format!("Quote by {author}"),
            Self::score_text(text),
        ))
    }

    /// Curated quotes as items
    pub fn curated(count: usize) -> Vec<ContentItem> {
        sample_curated(&HINGLISH_QUOTES, count)
            .into_iter()
            .map(|quote| {
                ContentItem::new(
                    format!("hinglish_{}", short_hash(quote)),
                    ContentKind::Quote,
                    truncate_chars(quote, TITLE_MAX_CHARS),
                    quote,
                    CURATED_QUOTES_SOURCE,
                    CURATED_QUOTE_SCORE,
                )
            })
            .collect()
    }

    async fn fetch_from(&self, url: &str) -> Result<Option<ContentItem>> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| request_error("quotes", QUOTE_API_TIMEOUT, &e))?;
        let payload = HttpResponseUtils::check_and_parse(response, "quotes").await?;
        Ok(Self::parse_quote(&payload))
    }
}

#[async_trait]
impl ContentProvider for QuotesProvider {
    async fn fetch_content(&self, limit: usize) -> Result<Vec<ContentItem>> {
        info!("Fetching quotes from {} API(s)", self.apis.len());
        let mut items = Vec::new();

        for url in &self.apis {
            if items.len() >= limit {
                break;
            }
            match self.fetch_from(url).await {
                Ok(Some(item)) => items.push(item),
                Ok(None) => debug!("Quote API {} returned no quote", url),
                Err(e) => warn!("Quote API {} failed: {}", url, e),
            }
        }

        if items.len() < limit {
            warn!("Using curated Hinglish quotes");
            items.extend(Self::curated(limit - items.len()));
        }

        items.truncate(limit);
        info!("Fetched {} quotes", items.len());
        Ok(items)
    }

    async fn score_virality(&self, item: &ContentItem) -> Result<f64> {
        Ok(Self::score_text(&item.body))
    }

    fn provider_name(&self) -> &str {
        "quotes"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn quotes_factory(config: &ProviderConfig) -> ProviderFuture<dyn ContentProvider> {
    let config = config.clone();
    Box::pin(async move {
        let provider: Arc<dyn ContentProvider> = Arc::new(QuotesProvider::from_config(&config)?);
        Ok(provider)
    })
}

#[linkme::distributed_slice(CONTENT_PROVIDERS)]
static QUOTES_PROVIDER: ContentProviderEntry = ContentProviderEntry {
    name: "quotes",
    description: "Motivational quotes (quotable, zenquotes) with curated Hinglish fallback",
    factory: quotes_factory,
};
