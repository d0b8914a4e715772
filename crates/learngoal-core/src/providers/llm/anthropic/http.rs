//! HTTP layer: request dispatch and status mapping.
//!
//! This is the ONLY place for status code handling.

use reqwest::StatusCode;
use tracing::warn;

use crate::error::{CompletionError, CompletionResult};
use crate::model::{ApiErrorEnvelope, MessagesResponse, RequestPayload};

const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    pub(crate) url: String,
}

impl HttpBackend {
    /// Single POST, no retry.
    pub(crate) async fn send(&self, payload: &RequestPayload) -> CompletionResult<MessagesResponse> {
        let response = self.client.post(&self.url).json(payload).send().await?;
        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Network {
                message: format!("failed to read response body: {}", e),
            })?;

        match status.as_u16() {
            200..=299 => serde_json::from_str(&body).map_err(|e| {
                CompletionError::InvalidResponse {
                    message: format!("failed to parse messages response: {}", e),
                }
            }),

            401 | 403 => Err(CompletionError::Unauthorized {
                message: error_message(status, &body),
            }),

            code => {
                let message = error_message(status, &body);
                warn!(status = code, error = %message, "completion request rejected");
                Err(CompletionError::Api {
                    status: code,
                    message,
                })
            }
        }
    }
}

/// Prefer the API error envelope; fall back to the raw body, then the reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body) {
        return match envelope.error.kind {
            Some(kind) => format!("{}: {}", kind, envelope.error.message),
            None => envelope.error.message,
        };
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no error body")
            .to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
    }
}
