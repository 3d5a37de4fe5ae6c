use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "✓ Created .ggenrc.json\n");
    assert!(test.root().join(".ggenrc.json").exists());

    let content = test.read_file(".ggenrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["extensions"], serde_json::json!(["go"]));
    assert_eq!(parsed["ignoreTestFiles"], true);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".ggenrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: .ggenrc.json already exists\n");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("a.go", "// +gen\npackage a\n")?;

    let output = test.scan_command().output()?;
    assert!(
        output.status.success(),
        "Scan should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
