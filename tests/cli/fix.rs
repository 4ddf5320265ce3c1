use anyhow::Result;

use crate::CliTest;

const UNSORTED: &str = r#"// @sort-keys
export const routes = {
  // settings page
  settings: '/settings',
  home: '/', // landing
  about: '/about',
};
"#;

#[test]
fn test_fix_dry_run_leaves_files() -> Result<()> {
    let test = CliTest::with_file("src/routes.ts", UNSORTED)?;

    let output = test.run(test.fix_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("--> ./src/routes.ts:2:23  [object literal]"));
    assert!(output.stdout.contains("= sorted: about, home, settings"));
    assert!(output.stdout.contains("Would sort 1 structure(s) in 1 file(s)."));
    assert!(output.stdout.contains("Run with --apply to rewrite these files."));
    assert_eq!(test.read_file("src/routes.ts")?, UNSORTED);

    Ok(())
}

#[test]
fn test_fix_apply_rewrites_files() -> Result<()> {
    let test = CliTest::with_file("src/routes.ts", UNSORTED)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Sorted 1 structure(s) in 1 file(s)"));
    assert_eq!(
        test.read_file("src/routes.ts")?,
        r#"// @sort-keys
export const routes = {
  // settings page
  about: '/about',
  home: '/', // landing
  settings: '/settings',
};
"#
    );

    let output = test.run(test.check_command())?;
    assert_eq!(output.code, Some(0));

    Ok(())
}

#[test]
fn test_fix_apply_nested_structures() -> Result<()> {
    let test = CliTest::with_file(
        "src/config.ts",
        "// @sort-keys\nconst o = {\n  // @sort-keys\n  a: { d: 1, c: 2 },\n  c: 1,\n  b: 2,\n};\n",
    )?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        test.read_file("src/config.ts")?,
        "// @sort-keys\nconst o = {\n  // @sort-keys\n  a: { c: 2, d: 1 },\n  b: 2,\n  c: 1,\n};\n"
    );

    Ok(())
}

#[test]
fn test_fix_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file("src/a.ts", "// @sort-keys\nenum E { A, B }\n")?;

    let output = test.run(test.fix_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_fix_with_parse_error_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/broken.ts", "const = {\n")?;
    test.write_file("src/a.ts", "// @sort-keys\nenum E { B, A }\n")?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("1 file(s) could not be parsed"));
    assert_eq!(test.read_file("src/a.ts")?, "// @sort-keys\nenum E { A, B }\n");

    Ok(())
}
