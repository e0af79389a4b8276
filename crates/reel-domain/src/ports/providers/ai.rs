//! AI script generation port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{ContentItem, ScriptResult};

/// Turns a content item into a narration script
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Generate a hook/body/CTA script in the requested `style`
    async fn generate_script(&self, content: &ContentItem, style: &str) -> Result<ScriptResult>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}
