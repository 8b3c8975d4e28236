//! End-to-end CLI tests.
//!
//! Each test spawns the real binary against a tempdir so config discovery,
//! exit statuses and output shape are exercised the way a user sees them. The
//! tempdir gets a `.git` marker so config search never escapes into the
//! test environment.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{TempDir, tempdir};

const MARK_START: char = '\u{e000}';

fn sheet_dir() -> TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

fn write_tsv(dir: &Path, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.join("export.tsv");
    let mut content = String::from("id\tgroup\tkey\tsource\ttranslated\r\n");
    for line in lines {
        content.push_str(line);
        content.push_str("\r\n");
    }
    fs::write(&path, content).unwrap();
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sheetlint"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

#[test]
fn check_clean_sheet_exits_zero() {
    let dir = sheet_dir();
    let tsv = write_tsv(dir.path(), &["1\t10\tmenu_title\t&aShop\t&aObchod"]);

    let output = run(dir.path(), &["check", tsv.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("no issues found"), "stdout: {stdout}");
}

#[test]
fn check_violations_exit_one_with_categorized_report() {
    let dir = sheet_dir();
    let tsv = write_tsv(
        dir.path(),
        &[
            "1\t10\tcommand_kick_name\t/kick\t/vyhodit",
            "2\t10\tstats\tLevel 5\tLevel 10",
        ],
    );

    let output = run(dir.path(), &["check", tsv.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Command Name"), "stdout: {stdout}");
    assert!(stdout.contains("Numbers"), "stdout: {stdout}");
    assert!(stdout.contains("2 violations in 2 of 2 rows"), "stdout: {stdout}");
}

#[test]
fn check_missing_file_exits_two() {
    let dir = sheet_dir();
    let output = run(dir.path(), &["check", "no-such-export.tsv"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error"), "stderr: {stderr}");
    assert!(stderr.contains("no-such-export.tsv"), "stderr: {stderr}");
}

#[test]
fn check_json_report_shape() {
    let dir = sheet_dir();
    let tsv = write_tsv(dir.path(), &["1\t10\tjoin_msg\t{name} joined\tpřipojil se"]);

    let output = run(dir.path(), &["check", "--json", tsv.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = report["variables"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["line"], 2);
    assert_eq!(rows[0]["key"], "join_msg");
    // Danger markers pass through the JSON report verbatim.
    assert!(rows[0]["source"].as_str().unwrap().contains(MARK_START));
}

#[test]
fn check_rule_selection_limits_buckets() {
    let dir = sheet_dir();
    // Fails both trailing-dots and numbers; only trailing-dots is requested.
    let tsv = write_tsv(dir.path(), &["1\t10\tstats\tLevel 5.\tLevel 10"]);

    let output = run(
        dir.path(),
        &[
            "check",
            "--json",
            "--rule",
            "trailing-dots",
            tsv.to_str().unwrap(),
        ],
    );
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report.get("trailing-dots").is_some());
    assert!(report.get("numbers").is_none());
}

#[test]
fn check_honors_config_toggles() {
    let dir = sheet_dir();
    fs::write(
        dir.path().join(".sheetlintrc.json"),
        r#"{ "rules": { "numbers": false } }"#,
    )
    .unwrap();
    let tsv = write_tsv(dir.path(), &["1\t10\tstats\tLevel 5\tLevel 10"]);

    let output = run(dir.path(), &["check", tsv.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn init_creates_config_once() {
    let dir = sheet_dir();

    let output = run(dir.path(), &["init"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join(".sheetlintrc.json").exists());

    // A second init must not clobber the existing file.
    let output = run(dir.path(), &["init"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("already exists"), "stderr: {stderr}");
}

#[test]
fn words_lists_glossary_categories() {
    let dir = sheet_dir();
    let output = run(dir.path(), &["words"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Abbreviations"), "stdout: {stdout}");
    assert!(stdout.contains("PvP"), "stdout: {stdout}");
    assert!(stdout.contains("only when key+source contains"), "stdout: {stdout}");
}

#[test]
fn words_includes_configured_categories() {
    let dir = sheet_dir();
    fs::write(
        dir.path().join(".sheetlintrc.json"),
        r#"{ "extraWords": [{ "name": "Items", "terms": ["Cubelet Machine"] }] }"#,
    )
    .unwrap();

    let output = run(dir.path(), &["words"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Items"), "stdout: {stdout}");
    assert!(stdout.contains("Cubelet Machine"), "stdout: {stdout}");
}
