use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};

use super::args::InputArgs;

/// Resolve learning targets from `--targets`, `--file` or piped stdin.
///
/// An interactive stdin with no other source yields an empty string, which
/// the session then rejects as empty input.
pub fn read_learning_targets(args: &InputArgs) -> Result<String> {
    if let Some(targets) = &args.targets {
        return Ok(targets.clone());
    }

    match args.file.as_deref() {
        Some(path) if path == Path::new("-") => read_stdin(),
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read learning targets from {}", path.display())),
        None if std::io::stdin().is_terminal() => Ok(String::new()),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read learning targets from stdin")?;
    Ok(buf)
}
