//! Integration tests for the termlint CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn termlint() -> Command {
    Command::cargo_bin("termlint").unwrap()
}

#[test]
fn test_check_markdown_reports_findings() {
    termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("sample.md"))
        .arg("--quiet")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "sample.md:1:24: Incorrect term: “Javascript”, use “JavaScript” instead",
        ))
        .stdout(predicate::str::contains("use “bugfix” instead"))
        .stdout(predicate::str::contains("use “YAML” instead"))
        .stdout(predicate::str::contains("3 incorrect term(s) in 1 file(s)"))
        .stdout(predicate::str::contains("Github").not())
        .stdout(predicate::str::contains("“npm”").not());
}

#[test]
fn test_check_clean_file_exits_zero() {
    termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("clean.md"))
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_check_plain_text() {
    termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("-q")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("notes.txt:1:5: Incorrect term: “change log”"))
        .stdout(predicate::str::contains("use “source maps” instead"));
}

#[test]
fn test_glob_input_checks_every_file() {
    termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("*.md"))
        .arg("-q")
        .arg("--no-default-terms")
        .assert()
        .success();

    termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("*.md"))
        .arg("-q")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("sample.md"))
        .stdout(predicate::str::contains("clean.md").not());
}

#[test]
fn test_json_output() {
    let output = termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("sample.md"))
        .arg("-f")
        .arg("json")
        .arg("-q")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let findings = value[0]["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 3);
    assert_eq!(findings[0]["line"], 1);
    assert_eq!(findings[0]["fix"]["replacement"], "JavaScript");
}

#[test]
fn test_markdown_output() {
    termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("--format")
        .arg("markdown")
        .arg("-q")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("## tests/fixtures/notes.txt"))
        .stdout(predicate::str::contains("| Line | Column | Message |"))
        .stdout(predicate::str::contains("*Total incorrect terms: 2 in 1 file(s)*"));
}

#[test]
fn test_exclude_option() {
    termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("-x")
        .arg("change[- ]log(s)?")
        .arg("-x")
        .arg("source-map(s)?")
        .arg("-q")
        .assert()
        .success();
}

#[test]
fn test_config_file_with_relative_terms() {
    let output = termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("team.md"))
        .arg("--config")
        .arg(fixture_path("termlint.toml"))
        .arg("-q")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    // format and skip come from the config file
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let replacements: Vec<_> = value[0]["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["fix"]["replacement"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(replacements, vec!["GraphQL", "login", "GraphQL"]);
}

#[test]
fn test_format_flag_overrides_config() {
    termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("team.md"))
        .arg("-c")
        .arg(fixture_path("termlint.toml"))
        .arg("-f")
        .arg("text")
        .arg("-q")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("team.md:1:5: Incorrect term: “graphql”"));
}

#[test]
fn test_terms_flag() {
    termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("team.md"))
        .arg("--terms")
        .arg(fixture_path("team-terms.jsonc"))
        .arg("--no-default-terms")
        .arg("-q")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("2 incorrect term(s) in 1 file(s)"));
}

#[test]
fn test_fix_rewrites_files() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sample.md");
    fs::copy(fixture_path("sample.md"), &path).unwrap();

    termlint()
        .arg("check")
        .arg("-i")
        .arg(&path)
        .arg("--fix")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed 3 term(s)"));

    let fixed = fs::read_to_string(&path).unwrap();
    assert!(fixed.starts_with("# Getting started with JavaScript\n"));
    assert!(fixed.contains("the bugfix workflow for our YAML files."));
    assert!(fixed.contains("> Quoted text such as Github is left alone."));
    assert!(fixed.contains("echo \"bug-fix\""));

    termlint()
        .arg("check")
        .arg("-i")
        .arg(&path)
        .arg("-q")
        .assert()
        .success();
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let report = temp_dir.path().join("report.txt");

    termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("-o")
        .arg(&report)
        .arg("-q")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.contains("2 incorrect term(s) in 1 file(s)"));
}

#[test]
fn test_missing_input_exits_with_error() {
    termlint()
        .arg("check")
        .arg("-i")
        .arg("tests/fixtures/does-not-exist-*.md")
        .arg("-q")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No files found matching"));
}

#[test]
fn test_missing_terms_file_exits_with_error() {
    termlint()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("clean.md"))
        .arg("--terms")
        .arg("tests/fixtures/missing.jsonc")
        .arg("-q")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.jsonc"));
}

#[test]
fn test_validate_terms_file() {
    termlint()
        .arg("validate")
        .arg("--terms")
        .arg(fixture_path("team-terms.jsonc"))
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("Words: 1"))
        .stdout(predicate::str::contains("Patterns: 1"));
}

#[test]
fn test_validate_config_file() {
    termlint()
        .arg("validate")
        .arg("--config")
        .arg(fixture_path("termlint.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Compiled rules: 2"));
}

#[test]
fn test_validate_invalid_terms_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, r#"[["(unclosed", "x"]]"#).unwrap();

    termlint()
        .arg("validate")
        .arg("--terms")
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("is invalid"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_list_commands() {
    termlint()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"));

    termlint()
        .arg("list")
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("BlockQuote (skipped by default)"));

    termlint()
        .arg("list")
        .arg("terms")
        .arg("--config")
        .arg(fixture_path("termlint.toml"))
        .assert()
        .success()
        .stdout("GraphQL\nlog[- ]in(s)? → login$1\n");
}

#[test]
fn test_generate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("termlint.toml");

    termlint()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    termlint()
        .arg("validate")
        .arg("--config")
        .arg(&config)
        .assert()
        .success();
}

#[test]
fn test_help_and_version() {
    termlint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"));

    termlint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("termlint"));
}
