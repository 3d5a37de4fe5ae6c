use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const MODEL: &str = r#"// +gen:models

package models

// User is stored in the users table.
// +sql=users +mock:iface=UserStore
type User struct{}
"#;

#[test]
fn test_scan_lists_directives() -> Result<()> {
    let test = CliTest::with_file("models/user.go", MODEL)?;
    test.write_file("main.go", "package main\n\nfunc main() {}\n")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(stdout(&output), @r"
    models/user.go
      +gen:models
      +sql=users (inline)
      +mock:iface=UserStore (inline)
    ✓ Scanned 2 source files - no directive errors
    ");

    Ok(())
}

#[test]
fn test_scan_reports_all_bad_lines() -> Result<()> {
    let test = CliTest::with_file(
        "a.go",
        "// +Bad\n// +good\npackage a\n\n// +also_bad\nvar x = 1\n",
    )?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stderr(&output), @r"
    error: a.go:1: invalid directive (+Bad)
    error: a.go:5: invalid directive (directive commands should contain -, not _) (+also_bad)
    ");
    assert!(stdout(&output).contains("  +good\n"));
    assert!(stdout(&output).contains("2 directive error(s)"));

    Ok(())
}

#[test]
fn test_scan_skips_test_files_and_vendor() -> Result<()> {
    let test = CliTest::with_file("a.go", "// +gen\npackage a\n")?;
    test.write_file("a_test.go", "// +gen\npackage a\n")?;
    test.write_file("vendor/lib/lib.go", "// +gen\npackage lib\n")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "a.go\n  +gen\n✓ Scanned 1 source file - no directive errors\n"
    );

    Ok(())
}

#[test]
fn test_scan_uses_config() -> Result<()> {
    let test = CliTest::with_file("pkg/a.go", "// +gen\npackage a\n")?;
    test.write_file("cmd/main.go", "// +gen\npackage main\n")?;
    test.write_file(".ggenrc.json", r#"{ "includes": ["pkg"] }"#)?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("pkg/a.go"));
    assert!(!stdout(&output).contains("cmd/main.go"));

    Ok(())
}

#[test]
fn test_scan_invalid_config_is_error() -> Result<()> {
    let test = CliTest::with_file(".ggenrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignores"));

    Ok(())
}

#[test]
fn test_scan_source_root_flag() -> Result<()> {
    let test = CliTest::with_file("nested/a.go", "// +gen\npackage a\n")?;

    let output = test
        .scan_command()
        .args(["--source-root", "nested"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("a.go\n"));

    Ok(())
}

#[test]
fn test_scan_json() -> Result<()> {
    let test = CliTest::with_file("models/user.go", MODEL)?;
    test.write_file("bad.go", "package bad\n// +x:\n")?;

    let output = test.scan_command().arg("--json").output()?;

    assert_eq!(output.status.code(), Some(1));
    let json: Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(json["units"][1]["path"], "models/user.go");
    assert_eq!(json["units"][1]["directives"][0]["cmd"], "gen:models");
    assert_eq!(json["units"][1]["inlineDirectives"][1]["arg"], "UserStore");
    assert_eq!(json["errors"][0]["path"], "bad.go");
    assert_eq!(json["errors"][0]["line"], 2);

    Ok(())
}

#[test]
fn test_scan_finds_config_above_working_dir() -> Result<()> {
    let test = CliTest::with_file("pkg/a.tmpl", "// +gen\npackage a\n")?;
    test.write_file(".ggenrc.json", r#"{ "extensions": ["tmpl"] }"#)?;

    let output = test
        .scan_command()
        .current_dir(test.root().join("pkg"))
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("a.tmpl\n  +gen\n"));

    Ok(())
}

#[test]
fn test_scan_missing_source_root_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .scan_command()
        .args(["--source-root", "missing"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not a directory"));

    Ok(())
}

#[test]
fn test_scan_logging_levels() -> Result<()> {
    let test = CliTest::with_file("a.go", "// +gen\npackage a\n")?;

    let quiet = test.scan_command().output()?;
    assert!(!stderr(&quiet).contains("using default configuration"));

    let verbose = test.scan_command().arg("-v").output()?;
    assert!(stderr(&verbose).contains("No .ggenrc.json found, using default configuration"));

    let from_env = test.scan_command().env("GGEN_LOGGING", "1").output()?;
    assert!(stderr(&from_env).contains("No .ggenrc.json found, using default configuration"));

    Ok(())
}
