use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_parse_chained_directives() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .parse_command()
        .args(["+mock:iface=Foo +sample", "// +gen: Foo Bar"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(stdout(&output), @r"
    mock:iface	Foo
    sample
    gen	Foo Bar
    ");

    Ok(())
}

#[test]
fn test_parse_go_build() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.parse_command().arg("//go:build linux,amd64").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "build\tlinux,amd64\n");

    Ok(())
}

#[test]
fn test_parse_reports_each_bad_line() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .parse_command()
        .args(["+Bad", "+ok", "+cmd:", "+cmd_bad"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "ok\n");
    assert_snapshot!(stderr(&output), @r"
    error: invalid directive (+Bad)
    error: invalid directive (empty argument) (+cmd:)
    error: invalid directive (directive commands should contain -, not _) (+cmd_bad)
    ");

    Ok(())
}

#[test]
fn test_parse_json() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .parse_command()
        .args(["--json", "+a=1 +b", "nope"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let json: Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(json[0]["directives"][0]["raw"], "+a=1");
    assert_eq!(json[0]["directives"][0]["arg"], "1");
    assert_eq!(json[0]["directives"][1]["cmd"], "b");
    assert_eq!(json[1]["error"]["kind"], "InvalidDirective");

    Ok(())
}
