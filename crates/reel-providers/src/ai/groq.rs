//! Groq Script Provider
//!
//! Fast inference through Groq's OpenAI-compatible endpoint. The free tier is
//! rate limited, so 429 responses are common and reported as quota errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use reel_application::ports::registry::{AI_PROVIDERS, AiProviderEntry, ProviderConfig, ProviderFuture};
use reel_domain::error::Result;
use reel_domain::ports::AiProvider;
use reel_domain::value_objects::{ContentItem, ScriptResult};

use super::helpers::{ChatCompletionsClient, build_prompt, script_from_raw};
use crate::constants::{GROQ_BASE_URL, GROQ_DEFAULT_MODEL};

const PROVIDER_NAME: &str = "groq";

/// Groq script provider
pub struct GroqScriptProvider {
    chat: ChatCompletionsClient,
}

impl GroqScriptProvider {
    /// Build from provider configuration; requires `GROQ_API_KEY`
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let chat = ChatCompletionsClient::from_config(
            PROVIDER_NAME,
            config,
            "GROQ_API_KEY",
            GROQ_BASE_URL,
            GROQ_DEFAULT_MODEL,
        )?;
        info!("Groq initialized with {}", chat.model());
        Ok(Self { chat })
    }
}

#[async_trait]
impl AiProvider for GroqScriptProvider {
    async fn generate_script(&self, content: &ContentItem, style: &str) -> Result<ScriptResult> {
        info!("Generating script with Groq (model: {})", self.chat.model());
        let raw = self.chat.complete(&build_prompt(content, style)).await?;
        let script = script_from_raw(&raw, PROVIDER_NAME, self.chat.model());
        info!("Script generated with Groq ({} chars)", script.full_script.len());
        Ok(script)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn groq_factory(config: &ProviderConfig) -> ProviderFuture<dyn AiProvider> {
    let config = config.clone();
    Box::pin(async move {
        let provider: Arc<dyn AiProvider> = Arc::new(GroqScriptProvider::from_config(&config)?);
        Ok(provider)
    })
}

#[linkme::distributed_slice(AI_PROVIDERS)]
static GROQ_PROVIDER: AiProviderEntry = AiProviderEntry {
    name: PROVIDER_NAME,
    description: "Groq LPU inference (OpenAI-compatible, llama-3.3-70b-versatile)",
    factory: groq_factory,
};
