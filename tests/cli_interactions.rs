//! CLI integration tests
//!
//! Validate argument handling, flag conflicts, and the fatal
//! browser-not-found startup path without requiring an installed browser.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    Command::cargo_bin("fetchcmp").unwrap()
}

#[test]
fn test_help_lists_core_flags() {
    create_test_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--debug"))
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--settle"));
}

#[test]
fn test_version_flag() {
    create_test_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_conflicting_color_flags_rejected() {
    create_test_cmd()
        .arg("--color")
        .arg("--no-color")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--no-color"));
}

#[test]
fn test_zero_trial_count_rejected() {
    create_test_cmd()
        .arg("--count")
        .arg("0")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_malformed_target_rejected() {
    create_test_cmd()
        .arg("--target")
        .arg("not-a-pair")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("LABEL=URL"));
}

/// Missing browser binary is fatal before any trial runs: exit code 1 and no
/// chart file is produced.
#[test]
fn test_missing_browser_exits_one_without_running_trials() {
    let workdir = TempDir::new().unwrap();
    let output = workdir.path().join("comparison_boxplot.png");

    create_test_cmd()
        .current_dir(workdir.path())
        .arg("--browser")
        .arg("/definitely/not/a/browser")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Browser not found"));

    assert!(!output.exists());
}

/// An empty PATH plus nonexistent probe locations must also fail fast. The
/// probe list is platform-fixed, so this only proves the exit path when the
/// host genuinely has no browser in a well-known location; the --browser
/// override above is the deterministic variant.
#[test]
fn test_no_color_error_output_is_plain() {
    create_test_cmd()
        .arg("--browser")
        .arg("/definitely/not/a/browser")
        .arg("--no-color")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[BROWSER]"));
}
