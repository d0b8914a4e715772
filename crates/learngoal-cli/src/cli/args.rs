use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "learngoal",
    version,
    about = "Generate structured learning goals and section narratives from learning targets"
)]
pub struct Cli {
    /// Defaults to the interactive form
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive form
    Tui(TuiArgs),
    /// Submit learning targets once and print the generated text
    Generate(GenerateArgs),
    /// Print the request that would be sent, without calling the API
    Prompt(PromptArgs),
    Version,
}

/// Where the learning targets come from. Falls back to stdin when piped.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Learning targets as literal text
    #[arg(long, short = 't', value_name = "TEXT", conflicts_with = "file")]
    pub targets: Option<String>,

    /// Read learning targets from a file ("-" for stdin)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TuiArgs {
    /// Append logs to this file (the form owns the terminal otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the generated text to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct PromptArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the full JSON request body instead of the user message
    #[arg(long)]
    pub json: bool,
}
