use async_trait::async_trait;

use crate::error::CompletionResult;
use crate::prompt::Prompt;

pub mod anthropic;
pub mod fake;

pub use anthropic::AnthropicClient;
pub use fake::FakeClient;

/// One round trip to a text-generation service.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send the prompt and return the first text block of the answer.
    async fn complete(&self, prompt: &Prompt) -> CompletionResult<String>;

    fn provider_name(&self) -> &'static str;
}
