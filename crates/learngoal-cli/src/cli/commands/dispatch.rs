use super::super::args::*;
use crate::exit_codes::SUCCESS;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd.unwrap_or(Command::Tui(TuiArgs::default())) {
        Command::Tui(args) => super::tui::run(args).await,
        Command::Generate(args) => super::generate::run(args).await,
        Command::Prompt(args) => super::prompt::run(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
