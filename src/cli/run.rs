//! Dispatch a parsed command to its handler.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
