use std::path::PathBuf;

use anyhow::{Result, bail};
use tracing::info;

use super::super::{args::CommonArgs, report::print_skipped_warning};
use crate::{config::load_config, source::Workspace};

/// Load config and source units for commands that work on a project tree.
///
/// Configuration priority: `--source-root` decides where the config is searched, the
/// `.ggenrc.json` found there (or the defaults) decides what is scanned.
pub fn load_workspace(common: &CommonArgs) -> Result<Workspace> {
    let root = common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    if !root.is_dir() {
        bail!("Source root is not a directory: {}", root.display());
    }

    let config_result = load_config(&root)?;
    if !config_result.from_file {
        info!("No .ggenrc.json found, using default configuration");
    }

    let workspace = Workspace::load(&root, &config_result.config)?;
    print_skipped_warning(workspace.skipped_count);
    Ok(workspace)
}
