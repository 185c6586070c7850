use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init, list::list},
};

/// Dispatches to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
