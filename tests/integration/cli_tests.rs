//! Integration tests for the thriftgen CLI.
//!
//! None of these touch the filesystem: the IDL path is only recorded, never
//! opened.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use assert_cmd::Command;
use predicates::prelude::*;

fn thriftgen() -> Command {
    Command::cargo_bin("thriftgen").unwrap()
}

// ============================================================================
// Version and help
// ============================================================================

#[test]
fn test_version_without_idl() {
    thriftgen()
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(format!(
            "thriftgen {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_ignores_extra_positionals() {
    thriftgen()
        .args(["--version", "a.thrift", "b.thrift"])
        .assert()
        .code(0);
}

#[test]
fn test_single_dash_version() {
    thriftgen().arg("-version").assert().code(0);
}

#[test]
fn test_help_exits_with_usage_status() {
    thriftgen()
        .arg("-h")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage: thriftgen [options] file"))
        .stderr(predicate::str::contains("Available generators (and options):"))
        .stderr(predicate::str::contains("  thriftgo (go):"))
        .stderr(predicate::str::contains("naming_style:"));
}

#[test]
fn test_long_help_flag() {
    thriftgen()
        .arg("--help")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--plugin STR"));
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn test_unknown_flag_prints_error_and_usage() {
    thriftgen()
        .args(["--bogus", "a.thrift"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"))
        .stderr(predicate::str::contains("Usage: thriftgen [options] file"));
}

#[test]
fn test_flag_error_shows_usage_once() {
    thriftgen()
        .args(["--bogus", "a.thrift"])
        .assert()
        .code(2)
        .stderr(predicate::function(|err: &str| err.matches("Usage:").count() == 1))
        .stderr(predicate::str::contains("tip:").not());
}

#[test]
fn test_flags_after_idl_count_as_positionals() {
    thriftgen()
        .args(["-v", "a.thrift", "-o", "out", "-g", "go"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("got: 5"))
        .stderr(predicate::str::contains("[INFO]").not());
}

#[test]
fn test_missing_flag_value() {
    thriftgen()
        .args(["--out"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage: thriftgen"));
}

#[test]
fn test_no_idl_fails() {
    thriftgen()
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "require exactly 1 argument for the IDL parameter, got: 0",
        ));
}

#[test]
fn test_two_idls_fail() {
    thriftgen()
        .args(["a.thrift", "b.thrift"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("got: 2"))
        .stderr(predicate::str::contains("Usage:").not());
}

#[test]
fn test_bad_plugin_spec_fails_before_reporting() {
    thriftgen()
        .args(["-v", "-g", "go", "-p", "p1", "-p", ":bad", "-p", "p3", "a.thrift"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing name"))
        .stderr(predicate::str::contains("Plugin p1").not());
}

#[test]
fn test_bad_gen_spec_fails() {
    thriftgen()
        .args(["-g", "go:a,,b", "a.thrift"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty option key"));
}

// ============================================================================
// Successful runs
// ============================================================================

#[test]
fn test_single_idl_succeeds_with_warning() {
    thriftgen()
        .arg("a.thrift")
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARN] No target language specified"))
        .stderr(predicate::str::contains("[INFO]").not());
}

#[test]
fn test_quiet_suppresses_warnings() {
    thriftgen()
        .args(["-q", "a.thrift"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_quiet_wins_over_verbose() {
    thriftgen()
        .args(["--verbose", "--quiet", "-g", "cobol", "a.thrift"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_reports_default_output() {
    thriftgen()
        .args(["-v", "-g", "go", "a.thrift"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO] IDL: a.thrift"))
        .stderr(predicate::str::contains("[INFO] Target go -> ./gen-go"))
        .stderr(predicate::str::contains("[WARN]").not());
}

#[test]
fn test_verbose_reports_shared_output_dir() {
    thriftgen()
        .args(["-v", "-o", "out", "-g", "go", "-g", "rust", "a.thrift"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO] Target go -> out"))
        .stderr(predicate::str::contains("[INFO] Target rust -> out"))
        .stderr(predicate::str::contains(
            "[WARN] No backend registered for language \"rust\"",
        ));
}

#[test]
fn test_single_dash_long_options() {
    thriftgen()
        .args(["-verbose", "-out", "out", "-gen", "go", "a.thrift"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO] Target go -> out"));
}

#[test]
fn test_boolean_flag_with_explicit_value() {
    thriftgen()
        .args(["--verbose=true", "-g", "go", "a.thrift"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO] IDL: a.thrift"));

    thriftgen()
        .args(["--verbose=false", "-g", "go", "a.thrift"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO]").not());
}

#[test]
fn test_invalid_boolean_backend_option_warned() {
    thriftgen()
        .args(["-g", "go:gen_setter=maybe", "a.thrift"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "[WARN] invalid value \"maybe\" for boolean option \"gen_setter\"",
        ));
}

#[test]
fn test_includes_reported_in_order() {
    thriftgen()
        .args(["-v", "-g", "go", "-i", "a", "--include", "b", "-i", "a", "x.thrift"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO] Include paths: [a b a]"));
}

#[test]
fn test_plugins_reported() {
    thriftgen()
        .args(["-v", "-g", "go", "-p", "kitex=/bin/kitex:a=1", "-p", "other", "x.thrift"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO] Plugin kitex (/bin/kitex)"))
        .stderr(predicate::str::contains("[INFO] Plugin other"));
}

#[test]
fn test_unknown_backend_options_warned_in_order() {
    thriftgen()
        .args(["-g", "go:first,naming_style=golint,second", "a.thrift"])
        .assert()
        .success()
        .stderr(predicate::str::is_match(
            "(?s)\\[WARN\\] Option \"first\".*\\[WARN\\] Option \"second\"",
        )
        .unwrap());
}
