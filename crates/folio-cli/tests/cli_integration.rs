//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("folio").expect("Failed to find folio binary")
}

/// Write a config file into a temporary directory
fn write_config(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("page-config.json");
    std::fs::write(&path, json).unwrap();
    path
}

// ============================================================================
// Typewriter Command Tests
// ============================================================================

#[test]
fn test_typewriter_first_cycle() {
    cli_cmd()
        .args([
            "typewriter",
            "--words",
            r#"["Design","Build"]"#,
            "--colors",
            r#"["blue","green"]"#,
            "--duration",
            "6000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rotating 2 word(s):"))
        .stdout(predicate::str::contains("3000ms  color  color-blue"))
        .stdout(predicate::str::contains("3600ms  text   \"Design\""))
        .stdout(predicate::str::contains("5900ms  color  color-blue -> color-green"))
        .stdout(predicate::str::contains("6000ms  text   \"B\""))
        .stdout(predicate::str::contains("Completed cycles: 1"));
}

#[test]
fn test_typewriter_respects_duration() {
    cli_cmd()
        .args([
            "typewriter",
            "--words",
            r#"["Design"]"#,
            "--colors",
            r#"["blue"]"#,
            "--duration",
            "3200",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3200ms  text   \"De\""))
        .stdout(predicate::str::contains("\"Des\"").not());
}

#[test]
fn test_typewriter_timing_from_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{ "typewriter": { "initial_delay_ms": 0, "type_ms": 10 } }"#);

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .args([
            "typewriter",
            "--words",
            r#"["Hi"]"#,
            "--colors",
            r#"["coral"]"#,
            "--duration",
            "20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("20ms  text   \"Hi\""));
}

#[test]
fn test_typewriter_rejects_empty_list() {
    cli_cmd()
        .args(["typewriter", "--words", "[]", "--colors", "[]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Word list is empty"));
}

#[test]
fn test_typewriter_rejects_malformed_words() {
    cli_cmd()
        .args(["typewriter", "--words", "Design,Build", "--colors", r#"["blue"]"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed data-words"));
}

// ============================================================================
// Years Command Tests
// ============================================================================

#[test]
fn test_years_default_start() {
    cli_cmd()
        .args(["years", "--now", "2026-10-19T12:00:00Z"])
        .assert()
        .success()
        .stdout("6+\n");
}

#[test]
fn test_years_custom_start() {
    cli_cmd()
        .args(["years", "--since", "2016-01-01", "--now", "2026-10-19T12:00:00Z"])
        .assert()
        .success()
        .stdout("10+\n");
}

#[test]
fn test_verbose_flag_after_subcommand() {
    cli_cmd()
        .args(["years", "-vv", "--now", "2026-10-19T12:00:00Z"])
        .assert()
        .success()
        .stdout("6+\n");
}

#[test]
fn test_years_rejects_bad_date() {
    cli_cmd()
        .args(["years", "--since", "last summer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

// ============================================================================
// Scroll Command Tests
// ============================================================================

#[test]
fn test_highlight_uses_offset() {
    cli_cmd()
        .args([
            "highlight",
            "--scroll",
            "700",
            "--section",
            "home:0:800",
            "--section",
            "work:800:1200",
        ])
        .assert()
        .success()
        .stdout("work\n");
}

#[test]
fn test_highlight_none_past_last_section() {
    cli_cmd()
        .args(["highlight", "--scroll", "5000", "--section", "home:0:800"])
        .assert()
        .success()
        .stdout("none\n");
}

#[test]
fn test_highlight_rejects_bad_section() {
    cli_cmd()
        .args(["highlight", "--scroll", "0", "--section", "home:top"])
        .assert()
        .failure();
}

#[test]
fn test_parallax_at_top() {
    cli_cmd()
        .args(["parallax", "--scroll", "0", "--viewport", "900"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".badge-years: translateY(0px)"))
        .stdout(predicate::str::contains(".badge-location: translateY(0px)"));
}

#[test]
fn test_parallax_frozen_past_viewport() {
    cli_cmd()
        .args(["parallax", "--scroll", "900", "--viewport", "900"])
        .assert()
        .success()
        .stdout("frozen\n");
}

#[test]
fn test_navbar_threshold() {
    cli_cmd()
        .args(["navbar", "--scroll", "50"])
        .assert()
        .success()
        .stdout("none\n");

    cli_cmd()
        .args(["navbar", "--scroll", "51"])
        .assert()
        .success()
        .stdout("shadow\n");
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_default_is_valid_json() {
    let output = cli_cmd().args(["config", "default"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["scroll"]["highlight_offset"], 150.0);
    assert_eq!(value["career_start"], "2020-08-03");
}

#[test]
fn test_config_check_accepts_partial() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{ "scroll": { "parallax": [] } }"#);

    cli_cmd()
        .args(["config", "check"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config OK"))
        .stdout(predicate::str::contains("Parallax layers: 0"));
}

#[test]
fn test_config_check_rejects_invalid() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{ "scroll": { "reveal_threshold": 2 } }"#);

    cli_cmd()
        .args(["config", "check"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reveal_threshold"));
}
