//! Submit handler for the generator form.
//!
//! One submission at a time: `begin` validates the input, flips the session
//! to awaiting-response and hands back the prompt to send; `finish` takes the
//! client result and decides what the output area shows. `submit` does both
//! around a single client call.

use tracing::{debug, warn};

use crate::error::CompletionResult;
use crate::prompt::{build_prompt, Prompt};
use crate::providers::llm::LlmClient;

pub const SUCCESS_MESSAGE: &str = "Output Generated Successfully!";
pub const EMPTY_INPUT_WARNING: &str = "Please enter learning targets to process.";
pub const BUSY_MESSAGE: &str = "Generating learning goals and section narrative...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingResponse,
}

/// What the output area and status line show after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputArea {
    #[default]
    Empty,
    /// Submission refused before any network call.
    Warning(String),
    /// Completion text, unmodified.
    Generated(String),
    /// Error description; no output text.
    Failed(String),
}

impl OutputArea {
    /// Generated text, if the last submission succeeded.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Generated(text) => Some(text),
            _ => None,
        }
    }

    /// Status line text.
    pub fn status(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Warning(msg) => Some(msg.clone()),
            Self::Generated(_) => Some(SUCCESS_MESSAGE.to_string()),
            Self::Failed(msg) => Some(format!("An error occurred: {}", msg)),
        }
    }

    /// Whatever is most relevant to show: output text, or the status line.
    pub fn text(&self) -> String {
        match self {
            Self::Generated(text) => text.clone(),
            other => other.status().unwrap_or_default(),
        }
    }
}

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("{}", EMPTY_INPUT_WARNING)]
    EmptyInput,

    #[error("a generation request is already in flight")]
    Busy,
}

#[derive(Debug, Default)]
pub struct GeneratorSession {
    state: SessionState,
    display: OutputArea,
}

impl GeneratorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SessionState::AwaitingResponse
    }

    pub fn display(&self) -> &OutputArea {
        &self.display
    }

    /// Start a submission.
    ///
    /// Blank input sets the warning and leaves the session idle. While a
    /// request is in flight every submission is refused and the display is
    /// left alone.
    pub fn begin(&mut self, learning_targets: &str) -> Result<Prompt, SubmitRejected> {
        if self.is_busy() {
            debug!("submission ignored, request in flight");
            return Err(SubmitRejected::Busy);
        }
        if learning_targets.trim().is_empty() {
            self.display = OutputArea::Warning(EMPTY_INPUT_WARNING.to_string());
            return Err(SubmitRejected::EmptyInput);
        }

        self.state = SessionState::AwaitingResponse;
        Ok(build_prompt(learning_targets))
    }

    /// Complete the in-flight submission.
    pub fn finish(&mut self, result: CompletionResult<String>) -> &OutputArea {
        if !self.is_busy() {
            warn!("completion result received with no request in flight");
        }
        self.state = SessionState::Idle;
        self.display = match result {
            Ok(text) => OutputArea::Generated(text),
            Err(e) => {
                warn!(error = %e, "generation failed");
                OutputArea::Failed(e.to_string())
            }
        };
        &self.display
    }

    /// Run one submission end to end against `client`.
    pub async fn submit<C>(&mut self, client: &C, learning_targets: &str) -> &OutputArea
    where
        C: LlmClient + ?Sized,
    {
        let prompt = match self.begin(learning_targets) {
            Ok(prompt) => prompt,
            Err(_) => return &self.display,
        };
        let result = client.complete(&prompt).await;
        self.finish(result)
    }
}
