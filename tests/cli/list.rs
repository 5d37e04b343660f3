use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

const BUTTON: &str = r#"const Button = styled.button({
  margin: 0,
  fontWeight: 'bold',
});
"#;

#[test]
fn test_list_prints_normalized_declarations() -> Result<()> {
    let test = CliTest::with_file("src/Button.js", BUTTON)?;

    let (code, stdout, stderr) = run(test.list_command())?;

    assert_eq!(code, Some(0));
    assert_eq!(
        stdout,
        "button  src/Button.js:1:16\n\
         \x20 margin-top     0\n\
         \x20 margin-right   0\n\
         \x20 margin-bottom  0\n\
         \x20 margin-left    0\n\
         \x20 font-weight    bold\n\
         \n\
         ✓ Found 1 styled component(s) in 1 source file(s)\n"
    );
    assert!(stderr.is_empty());

    Ok(())
}

#[test]
fn test_list_json() -> Result<()> {
    let test = CliTest::with_file(
        "src/Title.tsx",
        "export const Title = styled(Text)`\n  font-weight: bold;\n  color: ${p => p.theme.colors.primary};\n`;\n",
    )?;

    let (code, stdout, _) = run({
        let mut cmd = test.list_command();
        cmd.args(["--format", "json"]);
        cmd
    })?;

    assert_eq!(code, Some(0));
    let parsed: Value = serde_json::from_str(&stdout)?;
    assert_eq!(
        parsed,
        serde_json::json!([{
            "filename": "src/Title.tsx",
            "line": 1,
            "column": 22,
            "component": "Text",
            "styles": [
                { "name": "font-weight", "value": "bold" },
                { "name": "color", "value": "(theme.colors.primary)" }
            ]
        }])
    );

    Ok(())
}

#[test]
fn test_list_with_patterns() -> Result<()> {
    let test = CliTest::with_file("src/a.js", "styled.a({});")?;
    test.write_file("src/b.tsx", "styled.b({});")?;

    let (code, stdout, _) = run({
        let mut cmd = test.list_command();
        cmd.arg("src/*.tsx");
        cmd
    })?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("b  src/b.tsx:1:1"));
    assert!(!stdout.contains("src/a.js"));
    assert!(stdout.contains("Found 1 styled component(s) in 1 source file(s)"));

    Ok(())
}

#[test]
fn test_list_skips_ignored_and_test_files() -> Result<()> {
    let test = CliTest::with_file("src/a.js", "styled.a({});")?;
    test.write_file("src/a.test.js", "styled.p({});")?;
    test.write_file("node_modules/lib/index.js", "styled.div({});")?;
    test.write_file("README.md", "styled.div({});")?;

    let (code, stdout, _) = run(test.list_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Found 1 styled component(s) in 1 source file(s)"));

    Ok(())
}

#[test]
fn test_list_reports_unparsable_files() -> Result<()> {
    let test = CliTest::with_file("src/broken.js", "const A = styled.p({")?;
    test.write_file("src/good.js", "const B = styled.p({ color: 'red' });")?;

    let (code, stdout, stderr) = run(test.list_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("p  src/good.js:1:11"));
    assert!(stdout.contains("Found 1 styled component(s) in 2 source file(s)"));
    assert_eq!(
        stderr,
        "warning: 1 file(s) could not be parsed (use -v for details)\n"
    );

    Ok(())
}

#[test]
fn test_list_verbose_prints_diagnostics() -> Result<()> {
    let test = CliTest::with_file("src/broken.js", "const A = styled.p({")?;
    test.write_file(
        "src/a.js",
        "const B = styled.p({ color: p => p.active ? 'red' : 'blue' });",
    )?;

    let (code, stdout, stderr) = run({
        let mut cmd = test.list_command();
        cmd.arg("-v");
        cmd
    })?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("color  $EXPRESSION$"));
    assert!(stderr.contains("No .styledrc.json found"));
    assert!(stderr.contains(
        "warning: Cannot resolve conditional expression, recorded as $EXPRESSION$  unsupported-value"
    ));
    assert!(stderr.contains("--> src/a.js:1:"));
    assert!(stderr.contains("parse-error"));
    assert!(stderr.contains("--> src/broken.js"));
    assert!(!stderr.contains("(use -v for details)"));

    Ok(())
}

#[test]
fn test_list_source_root() -> Result<()> {
    let test = CliTest::with_file("app/src/a.js", "styled.section({ display: 'grid' });")?;

    let (code, stdout, _) = run({
        let mut cmd = test.list_command();
        cmd.args(["--source-root", "app"]);
        cmd
    })?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("section  app/src/a.js:1:1"));

    Ok(())
}
