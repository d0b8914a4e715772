//! Anthropic Messages API client.
//!
//! Public API: no status code knowledge. All HTTP/status mapping in http.rs.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, info, warn};

use super::LlmClient;
use crate::config::{GeneratorConfig, API_KEY_ENV};
use crate::error::{CompletionError, CompletionResult, ConfigError};
use crate::model::{RequestPayload, DEFAULT_MODEL};
use crate::prompt::Prompt;

mod http;

use http::HttpBackend;

const USER_AGENT_VALUE: &str = concat!("learngoal/", env!("CARGO_PKG_VERSION"));

/// Value of the `anthropic-version` header.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for `POST /v1/messages`.
///
/// No retries and no client-side timeout: one call either completes or fails.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    http: HttpBackend,
}

impl AnthropicClient {
    pub fn new(config: &GeneratorConfig) -> CompletionResult<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| ConfigError::InvalidApiKey { var: API_KEY_ENV })?;
        api_key.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        default_headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));
        default_headers.insert("x-api-key", api_key);

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|e| CompletionError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http: HttpBackend {
                client,
                url: config.messages_url(),
            },
        })
    }

    /// Endpoint the client posts to.
    pub fn endpoint(&self) -> &str {
        &self.http.url
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn complete(&self, prompt: &Prompt) -> CompletionResult<String> {
        let payload = RequestPayload::new(prompt);
        debug!(
            url = %self.http.url,
            model = %payload.model,
            max_tokens = payload.max_tokens,
            "sending completion request"
        );

        let response = self.http.send(&payload).await?;

        if let Some(usage) = response.usage {
            info!(
                id = response.id.as_deref().unwrap_or("-"),
                model = response.model.as_deref().unwrap_or(DEFAULT_MODEL),
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "completion received"
            );
        }
        if response.is_truncated() {
            warn!(
                max_tokens = payload.max_tokens,
                "completion stopped at the output token limit"
            );
        }

        response
            .first_text()
            .map(str::to_string)
            .ok_or(CompletionError::EmptyResponse)
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_config() {
        let config = GeneratorConfig::new("test-key").with_base_url("http://localhost:9999/");
        let client = AnthropicClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9999/v1/messages");
        assert_eq!(client.provider_name(), "anthropic");
    }

    #[test]
    fn test_key_with_newline_is_rejected() {
        let config = GeneratorConfig::new("bad\nkey");
        let err = AnthropicClient::new(&config).unwrap_err();
        assert!(matches!(
            err,
            CompletionError::Config(ConfigError::InvalidApiKey { .. })
        ));
    }
}
