use anyhow::Result;
use insta::assert_snapshot;

use crate::CliTest;

#[test]
fn test_unsorted_object_literal() -> Result<()> {
    let test = CliTest::with_file(
        "src/theme.ts",
        "// @sort-keys\nexport const theme = {\n  primary: 'blue',\n  accent: 'red',\n};\n",
    )?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert_snapshot!(output.stdout.trim_end(), @r"
    error: object literal has unsorted keys  sort-keys
      --> ./src/theme.ts:2:22
      |
    2 | export const theme = {
      |                      ^
      = note: expected order: accent, primary
      = hint: run `sortkeys fix --apply` to reorder the keys

    ✘ 1 problem (1 error, 0 warnings)
    ");

    Ok(())
}

#[test]
fn test_every_structure_kind() -> Result<()> {
    let test = CliTest::with_file(
        "src/types.ts",
        r#"// @sort-keys
const a = { b: 1, a: 2 };
// @sort-keys
type T = { b: string; a: string };
// @sort-keys
interface I { b: string; a: string }
// @sort-keys
enum E { B, A }
"#,
    )?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: object literal has unsorted keys"));
    assert!(output.stdout.contains("error: type literal has unsorted keys"));
    assert!(output.stdout.contains("error: interface has unsorted keys"));
    assert!(output.stdout.contains("error: enum has unsorted keys"));
    assert!(output.stdout.contains("4 problems (4 errors, 0 warnings)"));

    Ok(())
}

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/theme.ts",
        "// @sort-keys\nexport const theme = { accent: 'red', primary: 'blue' };\nconst other = { z: 1, a: 2 };\n",
    )?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @"✓ Checked 1 source file - no issues found");

    Ok(())
}

#[test]
fn test_parse_error_fails_check() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/broken.ts", "const = {\n")?;
    test.write_file("src/ok.ts", "// @sort-keys\nconst a = { a: 1, b: 2 };\n")?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("./src/broken.ts"));

    Ok(())
}

#[test]
fn test_config_directive_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".sortkeysrc.json",
        r#"{
  "directive": "ordered",
  "ignores": ["**/generated/**"]
}"#,
    )?;
    test.write_file("src/generated/api.ts", "// @ordered\nconst a = { b: 1, a: 2 };\n")?;
    test.write_file("src/app.ts", "// @sort-keys\nconst a = { b: 1, a: 2 };\n")?;
    test.write_file("src/lib.ts", "// @ordered\nconst a = { d: 1, c: 2 };\n")?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("./src/lib.ts:2:11"));
    assert!(!output.stdout.contains("app.ts"));
    assert!(!output.stdout.contains("generated"));

    Ok(())
}

#[test]
fn test_cli_overrides_numeric_order() -> Result<()> {
    let test = CliTest::with_file(
        "src/codes.ts",
        "// @sort-keys\nconst codes = { 2: 'b', 10: 'a' };\n",
    )?;

    let output = test.run(test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("expected order: 10, 2"));

    let mut cmd = test.check_command();
    cmd.args(["--numeric-order", "numeric"]);
    let output = test.run(cmd)?;
    assert_eq!(output.code, Some(0));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".sortkeysrc.json", r#"{ "directive": "two words" }"#)?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error:"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("--help");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("check"));
    assert!(output.stdout.contains("fix"));
    assert!(output.stdout.contains("init"));

    Ok(())
}
