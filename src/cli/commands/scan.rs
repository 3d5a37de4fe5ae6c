use std::io;

use anyhow::Result;
use serde_json::{Value, json};

use super::super::{
    args::ScanCommand,
    exit_status::ExitStatus,
    report::{
        issues_json, print_issues_to, print_json, print_scan_summary_to, print_units_to,
        unit_json,
    },
};
use super::helper::load_workspace;

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let workspace = load_workspace(&cmd.common)?;

    if cmd.json {
        let units: Vec<Value> = workspace
            .units
            .iter()
            .map(|unit| unit_json(&workspace, unit))
            .collect();
        print_json(&json!({ "units": units, "errors": issues_json(&workspace) }))?;
    } else {
        print_units_to(&workspace, &mut io::stdout().lock());
        print_issues_to(&workspace, &mut io::stderr().lock());
        print_scan_summary_to(&workspace, &mut io::stdout().lock());
    }

    if workspace.issues.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
