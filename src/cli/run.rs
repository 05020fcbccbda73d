use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, lookup::lookup, scan::scan},
};

/// Dispatch to the handler of the parsed subcommand.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
