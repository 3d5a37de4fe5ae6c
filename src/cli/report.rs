//! Report formatting and printing utilities.
//!
//! Human output goes through writers so it can be tested; JSON output is built with
//! `serde_json`.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use serde_json::{Value, json};

use crate::directives::{Directive, DirectiveError};
use crate::source::{FileIssue, FileIssueKind, SourceUnit, Workspace};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// One directive as `cmd<TAB>arg`, or just `cmd` when there is no argument.
pub fn format_directive(directive: &Directive) -> String {
    if directive.arg().is_empty() {
        directive.cmd().bold().to_string()
    } else {
        format!("{}\t{}", directive.cmd().bold(), directive.arg())
    }
}

pub fn print_parse_error_to<W: Write>(err: &DirectiveError, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), err);
}

/// Print every unit that carries directives, top-level first.
pub fn print_units_to<W: Write>(workspace: &Workspace, writer: &mut W) {
    for unit in &workspace.units {
        if unit.directives.is_empty() && unit.inline_directives.is_empty() {
            continue;
        }
        let _ = writeln!(
            writer,
            "{}",
            workspace.display_path(&unit.path).display().to_string().cyan()
        );
        for directive in &unit.directives {
            let _ = writeln!(writer, "  {}", directive.raw());
        }
        for directive in &unit.inline_directives {
            let _ = writeln!(writer, "  {} {}", directive.raw(), "(inline)".dimmed());
        }
    }
}

/// Print each malformed line as `path:line: message`.
pub fn print_issues_to<W: Write>(workspace: &Workspace, writer: &mut W) {
    for issue in &workspace.issues {
        let path = workspace.display_path(&issue.path);
        match &issue.kind {
            FileIssueKind::Parse(err) => {
                for line_err in &err.errors {
                    let _ = writeln!(
                        writer,
                        "{} {}:{}: {}",
                        "error:".bold().red(),
                        path.display(),
                        line_err.line_number,
                        line_err.error
                    );
                }
            }
            FileIssueKind::Read(err) => {
                let _ = writeln!(writer, "{} {}", "error:".bold().red(), err);
            }
        }
    }
}

/// Print the closing summary line of a scan.
pub fn print_scan_summary_to<W: Write>(workspace: &Workspace, writer: &mut W) {
    let files = workspace.units.len();
    let files_word = if files == 1 { "file" } else { "files" };

    if workspace.issues.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Scanned {} source {} - no directive errors", files, files_word).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} directive error(s), {} unreadable file(s) in {} scanned {}",
                workspace.parse_error_count(),
                read_failure_count(&workspace.issues),
                files,
                files_word
            )
            .red()
        );
    }
}

/// Warn that some files had problems without listing them.
pub fn print_issue_warning(workspace: &Workspace) {
    print_issue_warning_to(workspace, &mut io::stderr().lock());
}

pub fn print_issue_warning_to<W: Write>(workspace: &Workspace, writer: &mut W) {
    if workspace.issues.is_empty() {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} file(s) have directive problems (run {} for details)",
        "warning:".bold().yellow(),
        workspace.issues.len(),
        "ggen scan".cyan()
    );
}

pub fn print_skipped_warning(skipped_count: usize) {
    if skipped_count > 0 {
        crate::lg::warn(format!(
            "{} path(s) skipped due to access errors{}",
            skipped_count,
            if crate::lg::verbose_enabled() {
                ""
            } else {
                " (use -v for details)"
            }
        ));
    }
}

fn read_failure_count(issues: &[FileIssue]) -> usize {
    issues
        .iter()
        .filter(|i| matches!(i.kind, FileIssueKind::Read(_)))
        .count()
}

// ============================================================
// JSON
// ============================================================

pub fn unit_json(workspace: &Workspace, unit: &SourceUnit) -> Value {
    json!({
        "path": path_string(workspace.display_path(&unit.path)),
        "directives": unit.directives,
        "inlineDirectives": unit.inline_directives,
    })
}

pub fn issues_json(workspace: &Workspace) -> Value {
    let mut errors = Vec::new();
    for issue in &workspace.issues {
        let path = path_string(workspace.display_path(&issue.path));
        match &issue.kind {
            FileIssueKind::Parse(err) => {
                errors.extend(err.errors.iter().map(|line_err| {
                    json!({
                        "path": path,
                        "line": line_err.line_number,
                        "message": line_err.error.to_string(),
                    })
                }));
            }
            FileIssueKind::Read(err) => errors.push(json!({
                "path": path,
                "line": Value::Null,
                "message": err.to_string(),
            })),
        }
    }
    Value::Array(errors)
}

pub fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

pub fn print_json(value: &Value) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
