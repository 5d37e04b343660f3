use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

const SOURCE: &str = r#"const A = styled.div({ color: 'red', padding: '4px 8px' });
const B = styled(Text)`color: red; display: flex;`;
"#;

#[test]
fn test_stats_selected_tables() -> Result<()> {
    let test = CliTest::with_file("src/a.js", SOURCE)?;

    let (code, stdout, stderr) = run({
        let mut cmd = test.stats_command();
        cmd.args(["elements", "components", "colors"]);
        cmd
    })?;

    assert_eq!(code, Some(0));
    assert_eq!(
        stdout,
        "Elements (1)\n\
         \x20 div  1\n\
         \n\
         Components (1)\n\
         \x20 Text  1\n\
         \n\
         Colors (1)\n\
         \x20 red  2\n\
         \n\
         Styles per module: 7.00\n\
         ✓ Found 2 styled component(s) in 1 source file(s)\n"
    );
    assert!(stderr.is_empty());

    Ok(())
}

#[test]
fn test_stats_top_from_config() -> Result<()> {
    let test = CliTest::with_file("src/a.js", SOURCE)?;
    test.write_file(".styledrc.json", r#"{ "top": 1 }"#)?;

    let (code, stdout, _) = run({
        let mut cmd = test.stats_command();
        cmd.arg("properties");
        cmd
    })?;

    assert_eq!(code, Some(0));
    assert!(stdout.starts_with("Properties (6)\n  color  2\n  ... and 5 more\n"));

    Ok(())
}

#[test]
fn test_stats_top_argument_overrides_config() -> Result<()> {
    let test = CliTest::with_file("src/a.js", SOURCE)?;
    test.write_file(".styledrc.json", r#"{ "top": 1 }"#)?;

    let (_, stdout, _) = run({
        let mut cmd = test.stats_command();
        cmd.args(["properties", "--top", "10"]);
        cmd
    })?;

    assert!(stdout.starts_with("Properties (6)\n  color           2\n"));
    assert!(!stdout.contains("more"));

    Ok(())
}

#[test]
fn test_stats_json() -> Result<()> {
    let test = CliTest::with_file("src/a.js", SOURCE)?;

    let (code, stdout, _) = run({
        let mut cmd = test.stats_command();
        cmd.args(["values", "--format", "json"]);
        cmd
    })?;

    assert_eq!(code, Some(0));
    let parsed: Value = serde_json::from_str(&stdout)?;
    assert_eq!(parsed["summary"]["files"], 1);
    assert_eq!(parsed["summary"]["instances"], 2);
    assert_eq!(parsed["summary"]["declarations"], 7);
    assert_eq!(parsed["summary"]["stylesPerModule"], 7.0);

    let tables = parsed["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0]["name"], "values");
    assert_eq!(tables[0]["total"], 4);
    assert_eq!(
        tables[0]["rows"],
        serde_json::json!([
            { "key": "4px", "count": 2 },
            { "key": "8px", "count": 2 },
            { "key": "red", "count": 2 },
            { "key": "flex", "count": 1 }
        ])
    );

    Ok(())
}

#[test]
fn test_stats_with_patterns() -> Result<()> {
    let test = CliTest::with_file("src/a.js", SOURCE)?;
    test.write_file("src/b.tsx", "styled.section({ display: 'grid' });")?;

    let (code, stdout, _) = run({
        let mut cmd = test.stats_command();
        cmd.args(["elements", "--pattern", "src/*.tsx"]);
        cmd
    })?;

    assert_eq!(code, Some(0));
    insta::assert_snapshot!(stdout, @r"
    Elements (1)
      section  1

    Styles per module: 1.00
    ✓ Found 1 styled component(s) in 1 source file(s)
    ");

    Ok(())
}

#[test]
fn test_stats_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.stats_command();
        cmd.arg("spacing");
        cmd
    })?;

    assert_eq!(code, Some(0));
    insta::assert_snapshot!(stdout, @r"
    Spacing (0)
      (none)

    Styles per module: 0.00
    ✓ Found 0 styled component(s) in 0 source file(s)
    ");

    Ok(())
}

#[test]
fn test_stats_invalid_config() -> Result<()> {
    let test = CliTest::with_file("src/a.js", SOURCE)?;
    test.write_file(".styledrc.json", "{ not json")?;

    let (code, stdout, stderr) = run(test.stats_command())?;

    assert_eq!(code, Some(2));
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("Error: Failed to parse config file"));

    Ok(())
}
