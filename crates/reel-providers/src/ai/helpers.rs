//! Common helpers for script generation providers
//!
//! The prompt, the section parser, and a client for OpenAI-compatible chat
//! completion endpoints.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use reel_application::ports::ProviderConfig;
use reel_domain::constants::{DEFAULT_CTA, DEFAULT_SCRIPT_STYLE};
use reel_domain::error::{Error, Result};
use reel_domain::value_objects::{ContentItem, ScriptResult};

use crate::constants::{
    CONTENT_TYPE_JSON, DEFAULT_HTTP_TIMEOUT, FALLBACK_HOOK_CHARS, SCRIPT_MAX_TOKENS,
    SCRIPT_TEMPERATURE,
};
use crate::utils::text::truncate_chars;
use crate::utils::{HttpResponseUtils, build_http_client, request_error};

/// Characters of the content body included in the prompt
const PROMPT_BODY_CHARS: usize = 500;

/// Section labels in the order they appear in a script
const SECTIONS: [&str; 3] = ["HOOK", "BODY", "CTA"];

/// Language description used in the prompt
fn style_description(style: &str) -> String {
    if style.trim().is_empty() || style.eq_ignore_ascii_case(DEFAULT_SCRIPT_STYLE) {
        "HINGLISH (Hindi + English mix)".to_string()
    } else {
        style.trim().to_uppercase()
    }
}

/// Prompt asking for a HOOK/BODY/CTA script about `content`
pub fn build_prompt(content: &ContentItem, style: &str) -> String {
    format!(
        "You are a viral short-form content creator for Indian audience.\n\
         Create a script in {} based on:\n\n\
         Content: {}\n\
         Details: {}\n\n\
         Create:\n\
         1. HOOK (first 3 seconds) - attention grabber\n\
         2. BODY (main content) - value delivery\n\
         3. CTA (call to action) - engagement prompt\n\n\
         Keep it under 60 seconds when spoken. Be energetic and relatable!",
        style_description(style),
        content.title,
        truncate_chars(&content.body, PROMPT_BODY_CHARS),
    )
}

/// Byte offset of `label` in `upper` at or after `from`, on word boundaries
fn find_label(upper: &str, label: &str, from: usize) -> Option<usize> {
    let bytes = upper.as_bytes();
    let mut search = from;
    while let Some(found) = upper.get(search..)?.find(label) {
        let start = search + found;
        let end = start + label.len();
        let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let after_ok = end >= bytes.len() || !bytes[end].is_ascii_alphanumeric();
        if before_ok && after_ok {
            return Some(start);
        }
        search = end;
    }
    None
}

/// Whether a line carries no words (markdown emphasis, list numbers)
fn is_decoration(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| matches!(c, '*' | '#' | '.' | ':' | '-' | ')' | '(' | ' ') || c.is_ascii_digit())
}

/// Text of section `start`, ending where section `end` begins
///
/// Labels match case-insensitively on word boundaries. Text on the label's
/// own line counts unless it is a parenthetical like `(first 3 seconds)`.
/// Returns an empty string when the label is missing.
pub fn extract_section(text: &str, start: &str, end: Option<&str>) -> String {
    let upper = text.to_ascii_uppercase();
    let Some(label_at) = find_label(&upper, start, 0) else {
        return String::new();
    };

    let after_label = label_at + start.len();
    let line_end = text[after_label..]
        .find('\n')
        .map_or(text.len(), |i| after_label + i);
    let inline = text[after_label..line_end]
        .trim_start_matches(|c: char| matches!(c, ':' | '*' | '#' | '-' | ' ' | '\t'));
    let content_start = if inline.trim().is_empty() || inline.starts_with('(') {
        (line_end + 1).min(text.len())
    } else {
        line_end - inline.len()
    };

    let content_end = end
        .and_then(|label| find_label(&upper, label, content_start))
        .unwrap_or(text.len());
    if content_end <= content_start {
        return String::new();
    }

    let mut lines: Vec<&str> = text[content_start..content_end].lines().collect();
    while lines.last().is_some_and(|line| is_decoration(line)) {
        lines.pop();
    }
    lines
        .join("\n")
        .trim()
        .trim_end_matches(['*', '#'])
        .trim()
        .to_string()
}

/// Split raw model output into a script
///
/// Missing sections fall back to: hook = first 100 characters of the output,
/// body = the whole output, cta = the default call to action.
pub fn script_from_raw(raw: &str, provider: &str, model: &str) -> ScriptResult {
    let raw = raw.trim();
    let section = |i: usize| extract_section(raw, SECTIONS[i], SECTIONS.get(i + 1).copied());

    let hook = Some(section(0))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| truncate_chars(raw, FALLBACK_HOOK_CHARS));
    let body = Some(section(1))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| raw.to_string());
    let cta = Some(section(2))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_CTA.to_string());

    ScriptResult::from_sections(hook, body, cta, provider).with_metadata("model", model)
}

/// Client for OpenAI-compatible `/chat/completions` endpoints
pub struct ChatCompletionsClient {
    provider: &'static str,
    http_client: Client,
    base_url: String,
    api_key: String,
    model: String,
    system_prompt: Option<String>,
    temperature: f64,
    max_tokens: u64,
    timeout: Duration,
}

impl ChatCompletionsClient {
    /// Build a client from provider configuration
    ///
    /// Requires an API key; `temperature` and `max_tokens` options override
    /// the defaults.
    pub fn from_config(
        provider: &'static str,
        config: &ProviderConfig,
        key_variable: &str,
        default_base_url: &str,
        default_model: &str,
    ) -> Result<Self> {
        let api_key = config.require_api_key(key_variable)?.trim().to_string();
        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or(default_base_url)
            .trim()
            .trim_end_matches('/')
            .to_string();
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| default_model.to_string());

        Ok(Self {
            provider,
            http_client: build_http_client(config, DEFAULT_HTTP_TIMEOUT)?,
            base_url,
            api_key,
            model,
            system_prompt: None,
            temperature: config.extra_parsed("temperature", SCRIPT_TEMPERATURE)?,
            max_tokens: config.extra_parsed("max_tokens", SCRIPT_MAX_TOKENS)?,
            timeout: DEFAULT_HTTP_TIMEOUT,
        })
    }

    /// Prepend a system message to every request
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Model used for completions
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request body for `prompt`
    pub fn payload(&self, prompt: &str) -> serde_json::Value {
        let mut messages = Vec::new();
        if let Some(system) = &self.system_prompt {
            messages.push(json!({"role": "system", "content": system}));
        }
        messages.push(json!({"role": "user", "content": prompt}));

        json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }

    /// Send `prompt` and return the first choice's text
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&self.payload(prompt))
            .send()
            .await
            .map_err(|e| request_error(self.provider, self.timeout, &e))?;

        let data = HttpResponseUtils::check_and_parse(response, self.provider).await?;
        data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                Error::provider(
                    self.provider,
                    "Invalid response format: missing choices[0].message.content",
                )
            })
    }
}
