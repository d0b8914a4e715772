//! Wire types for the Anthropic Messages API.

use serde::{Deserialize, Serialize};

use crate::prompt::Prompt;

/// Model every request is sent to.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Upper bound on generated tokens per request.
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

/// Message author role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body for `POST /v1/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestPayload {
    pub model: String,
    pub system: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub stream: bool,
}

impl RequestPayload {
    /// Single user turn carrying the rendered template, streaming disabled.
    pub fn new(prompt: &Prompt) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system: prompt.system.clone(),
            messages: vec![Message::user(prompt.user_message.clone())],
            max_tokens: MAX_OUTPUT_TOKENS,
            stream: false,
        }
    }
}

impl From<&Prompt> for RequestPayload {
    fn from(prompt: &Prompt) -> Self {
        Self::new(prompt)
    }
}

/// Response body of a non-streamed Messages call.
///
/// Only the fields the client reads are modelled; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    pub content: Vec<ContentBlock>,

    #[serde(default)]
    pub stop_reason: Option<String>,

    #[serde(default)]
    pub usage: Option<Usage>,
}

impl MessagesResponse {
    /// Text of the first non-empty `text` block, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Text { text } if !text.is_empty() => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether generation stopped at the output token bound.
    pub fn is_truncated(&self) -> bool {
        self.stop_reason.as_deref() == Some("max_tokens")
    }
}

/// Response content block. Non-text blocks are kept as opaque placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

/// Token accounting reported by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,

    #[serde(default)]
    pub output_tokens: u64,
}

/// Error envelope: `{"type": "error", "error": {"type": "...", "message": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    pub message: String,
}
