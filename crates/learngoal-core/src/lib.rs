//! Learning goal and section narrative generator.
//!
//! Turns free-text learning targets into a fixed prompt, sends it to the
//! Anthropic Messages API in a single non-streamed call and hands back the
//! first text block of the answer.
//!
//! - [`prompt`] renders the request text (pure, no I/O)
//! - [`providers::llm`] holds the completion client and a fake for tests
//! - [`session`] is the submit handler: empty-input guard, in-flight flag
//!   and what the output area shows
//!
//! # Quick Start
//!
//! ```no_run
//! use learngoal_core::{AnthropicClient, GeneratorConfig, GeneratorSession};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig::from_env()?;
//! let client = AnthropicClient::new(&config)?;
//! let mut session = GeneratorSession::new();
//!
//! let shown = session
//!     .submit(&client, "Students will add fractions with unlike denominators.")
//!     .await;
//! println!("{}", shown.text());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `ANTHROPIC_API_KEY` | API key (required) |
//! | `LEARNGOAL_API_URL` | API base URL (default: `https://api.anthropic.com`) |

pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod providers;
pub mod session;

pub use config::{GeneratorConfig, API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL};
pub use error::{CompletionError, CompletionResult, ConfigError};
pub use model::{
    ContentBlock, Message, MessagesResponse, RequestPayload, Role, Usage, DEFAULT_MODEL,
    MAX_OUTPUT_TOKENS,
};
pub use prompt::{build_prompt, render_user_message, Prompt, SYSTEM_INSTRUCTION};
pub use providers::llm::{AnthropicClient, FakeClient, LlmClient};
pub use session::{GeneratorSession, OutputArea, SessionState, SubmitRejected};
