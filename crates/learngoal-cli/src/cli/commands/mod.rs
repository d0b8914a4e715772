pub mod dispatch;
pub mod generate;
pub mod prompt;
pub mod tui;

pub use dispatch::dispatch;

use learngoal_core::GeneratorConfig;

use crate::exit_codes::CONFIG_ERROR;

/// Read configuration once at startup. On failure the reason is printed and
/// the exit code returned; nothing else runs.
pub(crate) fn load_config() -> Result<GeneratorConfig, i32> {
    GeneratorConfig::from_env().map_err(|e| {
        eprintln!("error: {e}");
        CONFIG_ERROR
    })
}
