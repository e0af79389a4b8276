//! Content acquisition port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::ContentItem;

/// Source of content items a video can be made from
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch up to `limit` content items
    async fn fetch_content(&self, limit: usize) -> Result<Vec<ContentItem>>;

    /// Score an item's viral potential (0-100)
    async fn score_virality(&self, item: &ContentItem) -> Result<f64>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}
