//! Diagnostics on stderr.
//!
//! Events go through `tracing`. The level is the larger of the `GGEN_LOGGING` environment
//! variable and the CLI's `-v` count:
//!
//! ```text
//! 0    warnings only
//! 1    info
//! 2    debug
//! 3+   trace
//! ```
//!
//! A non-numeric `GGEN_LOGGING` is read as an `EnvFilter` directive list, e.g. `ggen=debug`.

use std::{fmt::Display, io};

use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const LOGGING_ENV: &str = "GGEN_LOGGING";

/// Map a verbosity count to the most verbose level it enables.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn build_filter(env_value: Option<&str>, verbose: u8) -> EnvFilter {
    let env_value = env_value.map(str::trim).unwrap_or_default();
    let (level, directives) = match env_value.parse::<u8>() {
        Ok(level) => (level.max(verbose), ""),
        Err(_) => (verbose, env_value),
    };

    EnvFilter::builder()
        .with_default_directive(level_for(level).into())
        .parse_lossy(directives)
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init(verbose: u8) {
    let filter = build_filter(std::env::var(LOGGING_ENV).ok().as_deref(), verbose);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// True when info-level diagnostics are printed.
pub fn verbose_enabled() -> bool {
    LevelFilter::current() >= LevelFilter::INFO
}

/// Print a user-facing warning.
pub fn warn(message: impl Display) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}
