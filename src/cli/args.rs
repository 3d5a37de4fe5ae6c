//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `parse`: Parse directive lines given on the command line
//! - `scan`: List every file's directives and report malformed ones
//! - `filter`: Print the files a generator command applies to
//! - `init`: Initialize ggen configuration file

use std::path::PathBuf;

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Verbosity requested with `-v` flags.
    pub fn verbosity(&self) -> u8 {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Filter(cmd)) => cmd.common.verbose,
            Some(Command::Parse(_)) | Some(Command::Init) | None => 0,
        }
    }
}

/// Common arguments shared by commands that load source files.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source root directory (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Directive lines, e.g. "+mock:iface=Foo" or "//go:build linux"
    #[arg(required = true)]
    pub lines: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FilterCommand {
    /// Generator command to match, e.g. "mock" also matches "mock:iface"
    pub command: String,

    /// Also match directives found after the file header
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse directive lines and print their commands and arguments
    Parse(ParseCommand),
    /// Show the directives of every source file and report malformed ones
    Scan(ScanCommand),
    /// List the source files selected by a generator command
    Filter(FilterCommand),
    /// Initialize a new .ggenrc.json configuration file
    Init,
}
