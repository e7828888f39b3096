//! Smoke tests for the keycalc CLI
//!
//! These tests run the real binary end to end.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the keycalc binary
fn keycalc() -> Command {
    let mut cmd = Command::cargo_bin("keycalc").expect("keycalc binary should exist");
    cmd.env_remove("RUST_LOG").env_remove("KEYCALC_CONFIG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    keycalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    keycalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_no_args_shows_help() {
    keycalc().assert().failure(); // Requires a subcommand
}

#[test]
fn test_run_subcommand_help() {
    keycalc()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--strict"))
        .stdout(predicate::str::contains("--steps"));
}

// ============================================================================
// Run Tests
// ============================================================================

#[test]
fn test_run_chained_expression() {
    keycalc().args(["run", "3+4*2="]).assert().success().stdout("14\n");
}

#[test]
fn test_run_named_keys() {
    keycalc()
        .args(["run", "56", "Backspace", "+1", "Enter"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_run_division_by_zero() {
    keycalc().args(["run", "1/0="]).assert().success().stdout("inf\n");
    keycalc()
        .args(["run", "--js-non-finite", "1/0="])
        .assert()
        .success()
        .stdout("Infinity\n");
}

#[test]
fn test_run_skips_unknown_keys_with_warning() {
    keycalc()
        .args(["run", "1x2="])
        .assert()
        .success()
        .stdout("12\n")
        .stderr(predicate::str::contains("skipping unrecognized key"));
}

#[test]
fn test_run_logs_without_ansi_when_piped() {
    for args in [vec!["run", "1x2="], vec!["--color", "never", "run", "1x2="]] {
        keycalc()
            .args(&args)
            .assert()
            .success()
            .stderr(predicate::str::contains("skipping unrecognized key"))
            .stderr(predicate::str::contains("\x1b[").not());
    }
}

#[test]
fn test_run_quiet_hides_warning() {
    keycalc()
        .args(["-q", "run", "1x2="])
        .assert()
        .success()
        .stdout("12\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_run_strict_rejects_unknown_key() {
    keycalc()
        .args(["run", "--strict", "1x2="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("\"x\""));
}

#[test]
fn test_run_steps() {
    keycalc()
        .args(["run", "--steps", "1+2="])
        .assert()
        .success()
        .stdout(predicate::str::contains("+  1"))
        .stdout(predicate::str::ends_with("3\n"));
}

#[test]
fn test_run_json() {
    let output = keycalc()
        .args(["run", "--format", "json", "2*3="])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["display"], "6");
    assert_eq!(json["steps"].as_array().unwrap().len(), 4);
    assert_eq!(json["steps"][3]["key"], "=");
}

#[test]
fn test_run_options_after_keys() {
    let output = keycalc()
        .args(["run", "3+4=", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["display"], "7");
    assert_eq!(json["skipped"].as_array().unwrap().len(), 0);

    keycalc()
        .args(["run", "1x2=", "-q"])
        .assert()
        .success()
        .stdout("12\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_run_hyphen_keys_after_separator() {
    keycalc()
        .args(["run", "--", "9", "-3="])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_run_requires_keys() {
    keycalc().arg("run").assert().failure();
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_prints_yaml() {
    keycalc()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("fresh-decimal: zero-prefixed"))
        .stdout(predicate::str::contains("non-finite: rust"));
}

#[test]
fn test_config_flags_override() {
    keycalc()
        .args(["config", "--literal-decimal", "--js-non-finite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fresh-decimal: literal"))
        .stdout(predicate::str::contains("non-finite: javascript"));
}

#[test]
fn test_config_file_is_honored() {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("keycalc.yaml");
    fs::write(&path, "fresh-decimal: literal\nnon-finite: javascript\n").unwrap();

    keycalc()
        .arg("--config")
        .arg(&path)
        .args(["run", "5+."])
        .assert()
        .success()
        .stdout(".\n");

    // The start-up entry is not fresh, so the first decimal point appends
    keycalc()
        .arg("--config")
        .arg(&path)
        .args(["run", "."])
        .assert()
        .success()
        .stdout("0.\n");

    keycalc()
        .arg("--config")
        .arg(&path)
        .args(["run", "0/0="])
        .assert()
        .success()
        .stdout("NaN\n");

    keycalc()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("non-finite: javascript"));
}

#[test]
fn test_config_file_errors() {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("bad.yaml");
    fs::write(&path, "precision: 3\n").unwrap();

    keycalc()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    keycalc()
        .args(["--config", "/nonexistent/keycalc.yaml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}
