use anyhow::Context;
use learngoal_core::session::SUCCESS_MESSAGE;
use learngoal_core::{AnthropicClient, GeneratorSession, OutputArea};

use super::load_config;
use crate::cli::args::GenerateArgs;
use crate::cli::input::read_learning_targets;
use crate::exit_codes::{EMPTY_INPUT, GENERATION_FAILED, INTERNAL_ERROR, SUCCESS};

pub async fn run(args: GenerateArgs) -> anyhow::Result<i32> {
    crate::logging::init_stderr();

    let config = match load_config() {
        Ok(config) => config,
        Err(code) => return Ok(code),
    };
    let client = match AnthropicClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(e.exit_code());
        }
    };

    let targets = read_learning_targets(&args.input)?;
    let mut session = GeneratorSession::new();

    match session.submit(&client, &targets).await {
        OutputArea::Generated(text) => {
            match &args.output {
                Some(path) => {
                    std::fs::write(path, text)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("{} ({})", SUCCESS_MESSAGE, path.display());
                }
                None => println!("{text}"),
            }
            Ok(SUCCESS)
        }
        OutputArea::Warning(msg) => {
            eprintln!("warning: {msg}");
            Ok(EMPTY_INPUT)
        }
        failed @ OutputArea::Failed(_) => {
            eprintln!("{}", failed.text());
            Ok(GENERATION_FAILED)
        }
        OutputArea::Empty => Ok(INTERNAL_ERROR),
    }
}
