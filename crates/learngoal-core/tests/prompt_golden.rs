//! Golden test for the rendered user message.

use std::path::PathBuf;

use learngoal_core::{build_prompt, RequestPayload, SYSTEM_INSTRUCTION};

fn golden(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

#[test]
fn golden_fractions_user_message() {
    let input = golden("fractions_input.txt");
    let expected = golden("fractions_user_message.txt");

    let prompt = build_prompt(&input);

    assert_eq!(prompt.user_message, expected);
    assert_eq!(prompt.system, SYSTEM_INSTRUCTION);
}

#[test]
fn golden_template_identical_for_other_inputs() {
    let input = golden("fractions_input.txt");
    let expected = golden("fractions_user_message.txt");

    let other = "I can describe the water cycle.\nI can label a diagram {of it}.";
    let rendered = build_prompt(other).user_message;

    assert_eq!(rendered.replacen(other, &input, 1), expected);
}

#[test]
fn golden_payload_carries_message() {
    let input = golden("fractions_input.txt");
    let expected = golden("fractions_user_message.txt");

    let payload = RequestPayload::new(&build_prompt(&input));
    assert_eq!(payload.messages.len(), 1);
    assert_eq!(payload.messages[0].content, expected);
}
