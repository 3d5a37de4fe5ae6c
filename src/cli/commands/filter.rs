use anyhow::Result;
use serde_json::Value;
use tracing::info;

use super::super::{
    args::FilterCommand,
    exit_status::ExitStatus,
    report::{path_string, print_issue_warning, print_json},
};
use super::helper::load_workspace;
use crate::directives::filter_by_command;

pub fn filter(cmd: FilterCommand) -> Result<ExitStatus> {
    let mut workspace = load_workspace(&cmd.common)?;
    let filter = filter_by_command(cmd.command.as_str());

    let matched = if cmd.all {
        filter.filter_all(&mut workspace)
    } else {
        filter.filter(&mut workspace)
    };
    info!(
        "{} of {} file(s) selected by '{}'",
        matched,
        workspace.units.len(),
        filter.command()
    );

    let paths: Vec<String> = workspace
        .included_units()
        .map(|unit| path_string(workspace.display_path(&unit.path)))
        .collect();

    if cmd.json {
        print_json(&Value::from(paths))?;
    } else {
        for path in &paths {
            println!("{}", path);
        }
    }

    print_issue_warning(&workspace);
    Ok(ExitStatus::Success)
}
