use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::LlmClient;
use crate::error::{CompletionError, CompletionResult};
use crate::prompt::Prompt;
use async_trait::async_trait;

#[derive(Debug)]
enum FakeOutcome {
    Respond(String),
    Fail(String),
}

/// In-memory client. Counts calls and remembers the last prompt.
#[derive(Debug)]
pub struct FakeClient {
    outcome: FakeOutcome,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<Prompt>>,
}

impl FakeClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            outcome: FakeOutcome::Respond(response.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Every call fails with a network error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: FakeOutcome::Fail(message.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<Prompt> {
        self.last_prompt.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete(&self, prompt: &Prompt) -> CompletionResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_prompt.lock() {
            *guard = Some(prompt.clone());
        }

        match &self.outcome {
            FakeOutcome::Respond(text) => Ok(text.clone()),
            FakeOutcome::Fail(message) => Err(CompletionError::Network {
                message: message.clone(),
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
