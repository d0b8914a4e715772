use learngoal_core::{build_prompt, RequestPayload};

use crate::cli::args::PromptArgs;
use crate::cli::input::read_learning_targets;
use crate::exit_codes::SUCCESS;

/// Dry run: render the request locally. Needs no API key.
pub fn run(args: PromptArgs) -> anyhow::Result<i32> {
    crate::logging::init_stderr();

    let targets = read_learning_targets(&args.input)?;
    if targets.trim().is_empty() {
        tracing::warn!("rendering prompt with empty learning targets");
    }
    let prompt = build_prompt(&targets);

    if args.json {
        let payload = RequestPayload::new(&prompt);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", prompt.user_message);
    }

    Ok(SUCCESS)
}
