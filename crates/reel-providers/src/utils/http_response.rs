//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! These are shared utilities, not ports.

use std::time::Duration;

use reel_application::ports::ProviderConfig;
use reel_domain::error::{Error, Result};
use reqwest::{Client, Response};

use crate::constants::{ERROR_MSG_REQUEST_TIMEOUT, USER_AGENT};

/// Format error message for a provider
fn provider_error(provider: &str, context: &str, details: &str) -> Error {
    Error::provider(provider, format!("{context}: {details}"))
}

/// Build the HTTP client owned by one provider instance
///
/// Failure is reported as a construction error so the chain moves on.
pub fn build_http_client(config: &ProviderConfig, timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| {
            Error::construction(
                config.capability,
                &config.provider,
                format!("Failed to create HTTP client: {e}"),
            )
        })
}

/// Map a transport error into a provider error
pub fn request_error(provider: &str, timeout: Duration, error: &reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::provider(provider, format!("{ERROR_MSG_REQUEST_TIMEOUT} {timeout:?}"))
    } else {
        Error::provider(provider, format!("HTTP request failed: {error}"))
    }
}

/// Utilities for processing HTTP responses
///
/// Provides common response handling patterns used by API providers.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status, returning the response when successful
    ///
    /// Status 429 is reported as "rate limit exceeded" so the resolver
    /// classifies it as a quota condition.
    pub async fn check_status(response: Response, provider_name: &str) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let code = status.as_u16();

        Err(match code {
            401 | 403 => provider_error(provider_name, "authentication failed", &error_text),
            429 => provider_error(provider_name, "rate limit exceeded (429)", &error_text),
            500..=599 => {
                provider_error(provider_name, &format!("server error ({code})"), &error_text)
            }
            _ => provider_error(provider_name, &format!("request failed ({code})"), &error_text),
        })
    }

    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    ///
    /// # Returns
    /// Parsed JSON value on success, or an appropriate error
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        Self::check_status(response, provider_name)
            .await?
            .json()
            .await
            .map_err(|e| provider_error(provider_name, "response parse failed", &e.to_string()))
    }

    /// Check response status and read the body as bytes
    pub async fn check_and_read(response: Response, provider_name: &str) -> Result<Vec<u8>> {
        let bytes = Self::check_status(response, provider_name)
            .await?
            .bytes()
            .await
            .map_err(|e| provider_error(provider_name, "response read failed", &e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
