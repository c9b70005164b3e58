use anyhow::{Context, Result};
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

const CONFIG: &str = ".lprojauditrc.json";

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "ignores",
        "resourceExtension",
        "sourceExtensions",
        "localeFolderSuffix",
        "primaryLocale",
        "placeholder",
        "usagePattern",
        "blockCommentDepth",
    ] {
        assert!(parsed.get(field).is_some(), "Config should have '{}' field", field);
    }
    assert_eq!(parsed["primaryLocale"], "en");
    assert_eq!(parsed["placeholder"], "%@");
    assert!(parsed["blockCommentDepth"].is_null());

    // 2-space indentation
    assert!(content.contains("\n  \"ignores\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert_snapshot!(out.stdout.trim_end(), @"✓ Created .lprojauditrc.json");
    assert!(test.root().join(CONFIG).exists());
    assert_config_content(&test.read_file(CONFIG)?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(CONFIG, "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(2));
    assert_snapshot!(out.stderr.trim_end(), @"Error: .lprojauditrc.json already exists");
    assert_eq!(test.read_file(CONFIG)?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    let mut init = test.command();
    init.arg("init");
    run(init)?;

    test.write_file("en.lproj/Localizable.strings", "\"ok\" = \"OK\";\n")?;
    test.write_file("Main.swift", "\"ok\".localized\n")?;

    let out = run(test.check_command("."))?;
    assert_eq!(
        out.code,
        Some(0),
        "Check command should work with initialized config. stderr: {}",
        out.stderr
    );

    Ok(())
}
