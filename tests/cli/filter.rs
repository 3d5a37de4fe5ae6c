use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("header.go", "// +mock:iface=Store\n\npackage a\n")?;
    test.write_file("inline.go", "package a\n\n// +mock\ntype T struct{}\n")?;
    test.write_file("other.go", "// +mocking\n// +sample\n\npackage a\n")?;
    Ok(test)
}

#[test]
fn test_filter_header_directives_only() -> Result<()> {
    let test = project()?;

    let output = test.filter_command("mock").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "header.go\n");

    Ok(())
}

#[test]
fn test_filter_all_includes_inline() -> Result<()> {
    let test = project()?;

    let output = test.filter_command("mock").arg("--all").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "header.go\ninline.go\n");

    Ok(())
}

#[test]
fn test_filter_exact_command() -> Result<()> {
    let test = project()?;

    let output = test.filter_command("sample").output()?;

    assert_eq!(stdout(&output), "other.go\n");

    Ok(())
}

#[test]
fn test_filter_no_match_is_success() -> Result<()> {
    let test = project()?;

    let output = test.filter_command("enum").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");

    Ok(())
}

#[test]
fn test_filter_warns_about_bad_files() -> Result<()> {
    let test = project()?;
    test.write_file("bad.go", "// +mock\n// +Bad\npackage a\n")?;

    let output = test.filter_command("mock").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "bad.go\nheader.go\n");
    assert!(stderr(&output).contains("1 file(s) have directive problems"));

    Ok(())
}

#[test]
fn test_filter_json() -> Result<()> {
    let test = project()?;

    let output = test
        .filter_command("mock")
        .args(["--all", "--json"])
        .output()?;

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json, serde_json::json!(["header.go", "inline.go"]));

    Ok(())
}
