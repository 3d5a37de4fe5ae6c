use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{filter::filter, init::init, parse::parse, scan::scan},
    exit_status::ExitStatus,
};

/// Dispatch to the handler of the parsed command.
///
/// # Returns
/// - `Ok(ExitStatus)` describing the outcome of the command
/// - `Err` if the command could not run (e.g., invalid config, missing source root)
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Parse(cmd)) => parse(cmd),
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Filter(cmd)) => filter(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
