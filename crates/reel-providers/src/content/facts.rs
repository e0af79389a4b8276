//! Facts Content Provider
//!
//! Fetches a random fact and fills the rest of the request with curated facts
//! about India.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use reel_application::ports::registry::{
    CONTENT_PROVIDERS, ContentProviderEntry, ProviderConfig, ProviderFuture,
};
use reel_domain::constants::MAX_VIRALITY_SCORE;
use reel_domain::error::Result;
use reel_domain::ports::ContentProvider;
use reel_domain::value_objects::{ContentItem, ContentKind};

use super::sample_curated;
use crate::constants::{
    CURATED_FACT_SCORE, CURATED_FACTS_SOURCE, TITLE_MAX_CHARS, USELESS_FACTS_URL,
};
use crate::utils::text::{short_hash, truncate_chars};
use crate::utils::{HttpResponseUtils, JsonExt, build_http_client, request_error};

/// Curated facts for an Indian audience
pub const INDIAN_FACTS: [&str; 8] = [
    "India hai duniya ka sabse bada democracy! 1.4 billion log voting karte hain.",
    "Shampoo ka invention India mein hua tha. Hinglish word 'champo' se aaya.",
    "Chess game ki shuruaat India mein hui thi, 6th century mein.",
    "Yoga ki origin India mein 5000 saal pehle hui thi.",
    "Zero ka invention India mein mathematician Aryabhatta ne kiya.",
    "India mein 22 official languages hain aur 1600+ dialects.",
    "World ka sabse expensive residence Mukesh Ambani ka Antilia hai Mumbai mein.",
    "Kumbh Mela space se bhi dikhta hai! Duniya ka sabse bada gathering.",
];

const FACTS_API_TIMEOUT: Duration = Duration::from_secs(5);

/// Fact fetcher with curated fallback
pub struct FactsProvider {
    http_client: Client,
    api_url: String,
}

impl FactsProvider {
    /// Create a provider reading from `api_url`
    pub fn new(http_client: Client, api_url: impl Into<String>) -> Self {
        Self {
            http_client,
            api_url: api_url.into(),
        }
    }

    /// Build from provider configuration
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let url = config.base_url.as_deref().unwrap_or(USELESS_FACTS_URL);
        Ok(Self::new(
            build_http_client(config, FACTS_API_TIMEOUT)?,
            url.trim(),
        ))
    }

    /// Score a fact: short facts and facts with numbers travel further
    pub fn score_text(fact: &str) -> f64 {
        let mut score: f64 = 65.0;
        if fact.chars().count() < 100 {
            score += 15.0;
        }
        if fact.chars().any(|c| c.is_ascii_digit()) {
            score += 10.0;
        }
        score.min(MAX_VIRALITY_SCORE)
    }

    /// Curated facts as items
    pub fn curated(count: usize) -> Vec<ContentItem> {
        sample_curated(&INDIAN_FACTS, count)
            .into_iter()
            .map(|fact| {
                ContentItem::new(
                    format!("indian_fact_{}", short_hash(fact)),
                    ContentKind::Fact,
                    truncate_chars(fact, TITLE_MAX_CHARS),
                    fact,
                    CURATED_FACTS_SOURCE,
                    CURATED_FACT_SCORE,
                )
            })
            .collect()
    }

    async fn fetch_remote(&self) -> Result<Option<ContentItem>> {
        let response = self
            .http_client
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| request_error("facts", FACTS_API_TIMEOUT, &e))?;
        let payload = HttpResponseUtils::check_and_parse(response, "facts").await?;

        Ok(payload.opt_str("text").map(|text| {
            ContentItem::new(
                format!("fact_{}", short_hash(text)),
                ContentKind::Fact,
                truncate_chars(text, TITLE_MAX_CHARS),
                text,
                "UselessFacts API",
                Self::score_text(text),
            )
        }))
    }
}

#[async_trait]
impl ContentProvider for FactsProvider {
    async fn fetch_content(&self, limit: usize) -> Result<Vec<ContentItem>> {
        info!("Fetching facts");
        let mut items = Vec::new();

        if limit > 0 {
            match self.fetch_remote().await {
                Ok(item) => items.extend(item),
                Err(e) => warn!("Facts API failed: {}", e),
            }
        }

        if items.len() < limit {
            items.extend(Self::curated(limit - items.len()));
        }

        items.truncate(limit);
        info!("Fetched {} facts", items.len());
        Ok(items)
    }

    async fn score_virality(&self, item: &ContentItem) -> Result<f64> {
        Ok(Self::score_text(&item.body))
    }

    fn provider_name(&self) -> &str {
        "facts"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn facts_factory(config: &ProviderConfig) -> ProviderFuture<dyn ContentProvider> {
    let config = config.clone();
    Box::pin(async move {
        let provider: Arc<dyn ContentProvider> = Arc::new(FactsProvider::from_config(&config)?);
        Ok(provider)
    })
}

#[linkme::distributed_slice(CONTENT_PROVIDERS)]
static FACTS_PROVIDER: ContentProviderEntry = ContentProviderEntry {
    name: "facts",
    description: "Random facts (uselessfacts) with curated Indian facts fallback",
    factory: facts_factory,
};
