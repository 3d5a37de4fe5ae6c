//! Command-line interface layer.

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;

use crate::lg;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    lg::init(args.verbosity());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
