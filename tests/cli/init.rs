use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["includes"], serde_json::json!([]));
    assert_eq!(
        parsed["ignores"],
        serde_json::json!(["**/node_modules/**", "**/dist/**", "**/build/**"])
    );
    assert_eq!(parsed["ignoreTestFiles"], Value::Bool(true));
    assert_eq!(parsed["top"], 20);

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;
    assert_eq!(code, Some(0));
    insta::assert_snapshot!(stdout, @"✓ Created .styledrc.json");

    assert!(test.root().join(".styledrc.json").exists());
    let content = test.read_file(".styledrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".styledrc.json", "{}")?;

    let (code, stdout, stderr) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;
    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert_eq!(stderr, "Error: .styledrc.json already exists\n");
    assert_eq!(test.read_file(".styledrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file(
        "src/Title.jsx",
        "export const Title = styled.h1({ fontSize: 24 });",
    )?;

    let (code, stdout, stderr) = run(test.list_command())?;
    assert_eq!(code, Some(0), "stderr: {}", stderr);
    assert!(stdout.contains("h1  src/Title.jsx:1:22"));

    Ok(())
}
