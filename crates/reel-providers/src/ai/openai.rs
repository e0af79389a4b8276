//! OpenAI Script Provider
//!
//! Implements the `AiProvider` port using OpenAI's chat completions API.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use reel_application::ports::registry::{AI_PROVIDERS, AiProviderEntry, ProviderConfig, ProviderFuture};
use reel_domain::error::Result;
use reel_domain::ports::AiProvider;
use reel_domain::value_objects::{ContentItem, ScriptResult};

use super::helpers::{ChatCompletionsClient, build_prompt, script_from_raw};
use crate::constants::{OPENAI_BASE_URL, OPENAI_DEFAULT_MODEL};

const PROVIDER_NAME: &str = "openai_direct";

const SYSTEM_PROMPT: &str =
    "You are a Hinglish scriptwriter for viral YouTube Shorts targeting Indian audience.";

/// OpenAI script provider
pub struct OpenAiScriptProvider {
    chat: ChatCompletionsClient,
}

impl OpenAiScriptProvider {
    /// Build from provider configuration; requires `OPENAI_API_KEY`
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let chat = ChatCompletionsClient::from_config(
            PROVIDER_NAME,
            config,
            "OPENAI_API_KEY",
            OPENAI_BASE_URL,
            OPENAI_DEFAULT_MODEL,
        )?
        .with_system_prompt(SYSTEM_PROMPT);
        Ok(Self { chat })
    }
}

#[async_trait]
impl AiProvider for OpenAiScriptProvider {
    async fn generate_script(&self, content: &ContentItem, style: &str) -> Result<ScriptResult> {
        info!("Generating script with OpenAI (model: {})", self.chat.model());
        let raw = self.chat.complete(&build_prompt(content, style)).await?;
        let script = script_from_raw(&raw, PROVIDER_NAME, self.chat.model());
        info!("Script generated with OpenAI ({} chars)", script.full_script.len());
        Ok(script)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn openai_factory(config: &ProviderConfig) -> ProviderFuture<dyn AiProvider> {
    let config = config.clone();
    Box::pin(async move {
        let provider: Arc<dyn AiProvider> = Arc::new(OpenAiScriptProvider::from_config(&config)?);
        Ok(provider)
    })
}

#[linkme::distributed_slice(AI_PROVIDERS)]
static OPENAI_PROVIDER: AiProviderEntry = AiProviderEntry {
    name: PROVIDER_NAME,
    description: "OpenAI chat completions (gpt-4 by default)",
    factory: openai_factory,
};
