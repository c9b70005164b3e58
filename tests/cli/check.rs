use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, run};

const EN: &str = "App/en.lproj/Localizable.strings";
const FR: &str = "App/fr.lproj/Localizable.strings";

fn clean_project() -> Result<CliTest> {
    CliTest::with_files(&[
        (
            EN,
            "/* Home screen */\n\"title\" = \"Welcome\";\n\"greeting\" = \"Hello %@\";\n",
        ),
        (
            FR,
            "/* Home screen */\n\"title\" = \"Bienvenue\";\n\"greeting\" = \"Bonjour %@\";\n",
        ),
        (
            "App/Home.swift",
            "label.text = \"title\".localized\nhello.text = \"greeting\".localized\n",
        ),
    ])
}

#[test]
fn test_clean_project_passes() -> Result<()> {
    let test = clean_project()?;

    let out = run(test.check_command("."))?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert_snapshot!(out.stdout.trim_end(), @"✓ Checked 2 resource files in 1 group, 1 source file - no issues found");
    Ok(())
}

#[test]
fn test_missing_translation_fails() -> Result<()> {
    let test = clean_project()?;
    test.write_file(
        EN,
        "\"title\" = \"Welcome\";\n\"greeting\" = \"Hello %@\";\n\"farewell\" = \"Bye\";\n",
    )?;
    test.write_file(
        "App/Home.swift",
        "a(\"title\".localized, \"greeting\".localized, \"farewell\".localized)\n",
    )?;

    let out = run(test.check_command("."))?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"farewell\"  missing-translation"));
    assert!(out.stdout.contains(&format!("--> {}\n", FR)));
    assert!(out.stdout.contains("exists in: App/en.lproj"));
    assert!(out.stdout.contains("1 problem (1 error, 0 warnings)"));
    Ok(())
}

#[test]
fn test_warnings_only_exit_zero() -> Result<()> {
    let test = clean_project()?;
    test.write_file(
        "App/Home.swift",
        "label.text = \"title\".localized\n// hello.text = \"greeting\".localized\n",
    )?;

    let out = run(test.check_command("."))?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("warning: \"greeting\"  unused-key"));
    assert!(out.stdout.contains(&format!("--> {}:3:1", EN)));
    assert!(out.stdout.contains("1 problem (0 errors, 1 warning)"));
    Ok(())
}

#[test]
fn test_duplicate_and_identical() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "en.lproj/Localizable.strings",
            "\"ok\" = \"OK\";\n\"ok\" = \"Okay\";\n",
        ),
        ("fr.lproj/Localizable.strings", "\"ok\" = \"Okay\";\n"),
        ("Main.swift", "\"ok\".localized\n"),
    ])?;

    let out = run(test.check_command("."))?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"ok\"  duplicate-key"));
    assert!(out.stdout.contains("assigned 2 times in en.lproj, last value wins"));
    assert!(out.stdout.contains("warning: \"ok\"  identical-translation"));
    assert!(out.stdout.contains("same translation (\"Okay\") in: en.lproj, fr.lproj"));
    Ok(())
}

#[test]
fn test_placeholder_mismatch() -> Result<()> {
    let test = clean_project()?;
    test.write_file(
        EN,
        "\"title\" = \"Welcome\";\n\"greeting\" = \"You have %@ new %@ messages\";\n",
    )?;
    test.write_file(
        FR,
        "\"title\" = \"Bienvenue\";\n\"greeting\" = \"Vous avez %@ nouveaux messages\";\n",
    )?;

    let out = run(test.check_command("."))?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"greeting\"  placeholder-mismatch"));
    assert!(out.stdout.contains(&format!("--> {}:2:1", FR)));
    assert!(
        out.stdout
            .contains("\"%@\" count: App/en.lproj = 2, App/fr.lproj = 1")
    );
    Ok(())
}

#[test]
fn test_primary_locale_flag_changes_baseline() -> Result<()> {
    let test = clean_project()?;
    test.write_file(EN, "\"title\" = \"Welcome\";\n\"greeting\" = \"Hi %@ %@\";\n")?;

    let mut cmd = test.check_command(".");
    cmd.args(["--primary-locale", "fr", "--rules", "placeholder"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains(&format!("--> {}:2:1", EN)));
    assert!(
        out.stdout
            .contains("\"%@\" count: App/fr.lproj = 1, App/en.lproj = 2")
    );
    Ok(())
}

#[test]
fn test_ghost_key_points_at_source() -> Result<()> {
    let test = clean_project()?;
    test.write_file(
        "App/Home.swift",
        "label.text = \"title\".localized\nhello.text = \"greeting\".localized\nx = \"gone\".localized\n",
    )?;

    let out = run(test.check_command("."))?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"gone\"  ghost-key"));
    assert!(out.stdout.contains("--> App/Home.swift:3:6"));
    assert!(out.stdout.contains("3 | x = \"gone\".localized"));
    Ok(())
}

#[test]
fn test_rules_filter() -> Result<()> {
    let test = clean_project()?;
    test.write_file(
        "App/Home.swift",
        "x = \"gone\".localized\n",
    )?;

    let mut cmd = test.check_command(".");
    cmd.args(["--rules", "unused"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("unused-key"));
    assert!(!out.stdout.contains("ghost-key"));
    Ok(())
}

#[test]
fn test_audits_subfolder_with_relative_paths() -> Result<()> {
    let test = clean_project()?;

    let out = run(test.check_command("App"))?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Checked 2 resource files in 1 group"));
    Ok(())
}

#[test]
fn test_root_from_env() -> Result<()> {
    let test = CliTest::with_files(&[
        ("work/App/en.lproj/Localizable.strings", "\"a\" = \"A\";\n"),
        ("work/App/Main.swift", "\"b\".localized\n"),
    ])?;

    let mut cmd = test.check_command("App");
    cmd.env("LPROJ_AUDIT_ROOT", test.root().join("work"));
    let out = run(cmd)?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("--> Main.swift:1:2"));
    Ok(())
}

#[test]
fn test_ignored_folders_are_skipped() -> Result<()> {
    let test = clean_project()?;
    test.write_file("Pods/Lib/en.lproj/Lib.strings", "\"lib\" = \"Lib\";\n")?;

    let out = run(test.check_command("."))?;

    assert_eq!(out.code, Some(0));
    assert!(!out.stdout.contains("Pods"));
    Ok(())
}

#[test]
fn test_malformed_entry_and_unbalanced_comment_warn() -> Result<()> {
    let test = clean_project()?;
    test.write_file(
        EN,
        "\"title\" = \"Welcome\";\n\"greeting\" = \"Hello %@\";\n\"url\" = \"https://example.com\";\n*/\n",
    )?;

    let out = run(test.check_command("."))?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("malformed-entry"));
    assert!(out.stdout.contains(&format!("--> {}:3:1", EN)));
    assert!(out.stdout.contains("unbalanced-comment"));
    assert!(out.stdout.contains(&format!("--> {}:4:1", EN)));
    Ok(())
}

#[test]
fn test_config_file_is_used() -> Result<()> {
    let test = clean_project()?;
    test.write_file(".lprojauditrc.json", r#"{ "ignores": ["App/fr.lproj/**"] }"#)?;

    let out = run(test.check_command("."))?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Checked 1 resource file in 1 group"));
    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = clean_project()?;
    test.write_file(".lprojauditrc.json", r#"{ "placeholder": "" }"#)?;

    let out = run(test.check_command("."))?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Error:"));
    assert!(out.stderr.contains("placeholder"));
    Ok(())
}

#[test]
fn test_missing_folder_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.check_command("Nowhere"))?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("does not exist"));
    Ok(())
}

#[test]
fn test_missing_path_is_a_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("check");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("<PATH>"));
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Usage:"));
    assert!(out.stdout.contains("check"));
    Ok(())
}
