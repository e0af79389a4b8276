//! Hugging Face Script Provider
//!
//! Uses the Hugging Face inference API text-generation task with an
//! instruction-tuned model.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::info;

use reel_application::ports::registry::{AI_PROVIDERS, AiProviderEntry, ProviderConfig, ProviderFuture};
use reel_domain::error::{Error, Result};
use reel_domain::ports::AiProvider;
use reel_domain::value_objects::{ContentItem, ScriptResult};

use super::helpers::{build_prompt, script_from_raw};
use crate::constants::{
    CONTENT_TYPE_JSON, DEFAULT_HTTP_TIMEOUT, HUGGINGFACE_BASE_URL, HUGGINGFACE_DEFAULT_MODEL,
    HUGGINGFACE_MAX_NEW_TOKENS, SCRIPT_TEMPERATURE,
};
use crate::utils::{HttpResponseUtils, JsonExt, build_http_client, request_error};

const PROVIDER_NAME: &str = "huggingface";

/// Hugging Face inference API provider
pub struct HuggingFaceScriptProvider {
    http_client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_new_tokens: u64,
    timeout: Duration,
}

impl HuggingFaceScriptProvider {
    /// Build from provider configuration; requires `HUGGINGFACE_API_KEY`
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let api_key = config.require_api_key("HUGGINGFACE_API_KEY")?.trim().to_string();
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| HUGGINGFACE_DEFAULT_MODEL.to_string());
        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or(HUGGINGFACE_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        info!("HuggingFace initialized with {}", model);

        Ok(Self {
            http_client: build_http_client(config, DEFAULT_HTTP_TIMEOUT)?,
            base_url,
            api_key,
            model,
            max_new_tokens: config.extra_parsed("max_new_tokens", HUGGINGFACE_MAX_NEW_TOKENS)?,
            timeout: DEFAULT_HTTP_TIMEOUT,
        })
    }

    /// Instruction-formatted prompt
    pub fn instruction(prompt: &str) -> String {
        format!("<s>[INST] {prompt} [/INST]")
    }

    /// Generated text of an inference response
    ///
    /// The API answers with `[{"generated_text": ...}]`, or with
    /// `{"error": ...}` while a model is loading or over quota.
    pub fn parse_generated(data: &serde_json::Value) -> Result<String> {
        if let Some(message) = data.opt_str("error") {
            return Err(Error::provider(PROVIDER_NAME, message));
        }
        let entry = data.as_array().and_then(|a| a.first()).unwrap_or(data);
        entry
            .opt_str("generated_text")
            .map(str::to_string)
            .ok_or_else(|| Error::provider(PROVIDER_NAME, "Invalid response format: missing generated_text"))
    }
}

#[async_trait]
impl AiProvider for HuggingFaceScriptProvider {
    async fn generate_script(&self, content: &ContentItem, style: &str) -> Result<ScriptResult> {
        info!("Generating script with HuggingFace (model: {})", self.model);
        let payload = json!({
            "inputs": Self::instruction(&build_prompt(content, style)),
            "parameters": {
                "max_new_tokens": self.max_new_tokens,
                "temperature": SCRIPT_TEMPERATURE,
                "do_sample": true,
                "return_full_text": false,
            }
        });

        let response = self
            .http_client
            .post(format!("{}/{}", self.base_url, self.model))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| request_error(PROVIDER_NAME, self.timeout, &e))?;

        let data = HttpResponseUtils::check_and_parse(response, PROVIDER_NAME).await?;
        let raw = Self::parse_generated(&data)?;
        let script = script_from_raw(&raw, PROVIDER_NAME, &self.model);
        info!("Script generated with HuggingFace ({} chars)", script.full_script.len());
        Ok(script)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn huggingface_factory(config: &ProviderConfig) -> ProviderFuture<dyn AiProvider> {
    let config = config.clone();
    Box::pin(async move {
        let provider: Arc<dyn AiProvider> =
            Arc::new(HuggingFaceScriptProvider::from_config(&config)?);
        Ok(provider)
    })
}

#[linkme::distributed_slice(AI_PROVIDERS)]
static HUGGINGFACE_PROVIDER: AiProviderEntry = AiProviderEntry {
    name: PROVIDER_NAME,
    description: "Hugging Face inference API (Llama-3.2-3B-Instruct)",
    factory: huggingface_factory,
};
