//! Prompt construction.
//!
//! Pure string assembly: no I/O, no error conditions. The learning targets
//! are appended between two constant template halves, so nothing in the
//! input (braces, placeholder-looking text, newlines) is ever interpreted.

mod template;

pub use template::SYSTEM_INSTRUCTION;
use template::{USER_TEMPLATE_HEAD, USER_TEMPLATE_TAIL};

/// System instruction plus rendered user message for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user_message: String,
}

impl Prompt {
    /// The learning targets as they were inserted into the user message.
    ///
    /// `None` if the message was not produced by [`render_user_message`].
    pub fn learning_targets(&self) -> Option<&str> {
        self.user_message
            .strip_prefix(USER_TEMPLATE_HEAD)?
            .strip_suffix(USER_TEMPLATE_TAIL)
    }
}

/// Build the full prompt for the given learning targets.
///
/// Empty input is accepted here; callers guard submission.
pub fn build_prompt(learning_targets: &str) -> Prompt {
    Prompt {
        system: SYSTEM_INSTRUCTION.to_string(),
        user_message: render_user_message(learning_targets),
    }
}

/// Render the user message with `learning_targets` at the insertion point.
pub fn render_user_message(learning_targets: &str) -> String {
    let mut message = String::with_capacity(
        USER_TEMPLATE_HEAD.len() + learning_targets.len() + USER_TEMPLATE_TAIL.len(),
    );
    message.push_str(USER_TEMPLATE_HEAD);
    message.push_str(learning_targets);
    message.push_str(USER_TEMPLATE_TAIL);
    message
}
