//! Integration tests for the arcadekit CLI: global flags, exit codes and the
//! catalog-free commands.

mod common;

use common::arcadekit;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    arcadekit(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: arcadekit"))
        .stdout(predicate::str::contains("truncate"))
        .stdout(predicate::str::contains("compact"))
        .stdout(predicate::str::contains("thumbnail"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    arcadekit(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("arcadekit"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_missing_subcommand_exit_code_2() {
    let dir = tempdir().unwrap();
    arcadekit(dir.path()).assert().code(2);
}

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    arcadekit(dir.path())
        .args(["--format", "records", "compact", "5"])
        .assert()
        .code(2);
}

#[test]
fn test_parse_error_with_json_format_emits_envelope() {
    let dir = tempdir().unwrap();
    arcadekit(dir.path())
        .args(["--format", "json", "truncate", "text", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

// ============================================================================
// truncate
// ============================================================================

#[test]
fn test_truncate_word_safe() {
    let dir = tempdir().unwrap();
    arcadekit(dir.path())
        .args(["truncate", "The quick brown fox", "--max", "12"])
        .assert()
        .success()
        .stdout("The quick ..\n");
}

#[test]
fn test_truncate_passthrough() {
    let dir = tempdir().unwrap();
    arcadekit(dir.path())
        .args(["truncate", "Pong", "--max", "10"])
        .assert()
        .success()
        .stdout("Pong\n");

    arcadekit(dir.path())
        .args(["truncate", "Space Invaders", "--max", "-1"])
        .assert()
        .success()
        .stdout("Space Invaders\n");
}

#[test]
fn test_truncate_fallback_and_unicode() {
    let dir = tempdir().unwrap();
    arcadekit(dir.path())
        .args(["truncate", "superlongsingleword", "-m", "5"])
        .assert()
        .success()
        .stdout("super ..\n");

    arcadekit(dir.path())
        .args(["truncate", "日本語テスト", "-m", "3"])
        .assert()
        .success()
        .stdout("日本語 ..\n");
}

#[test]
fn test_truncate_json() {
    let dir = tempdir().unwrap();
    arcadekit(dir.path())
        .args(["--format", "json", "truncate", "hello world", "--max", "6"])
        .assert()
        .success()
        .stdout("{\"value\":\"hello ..\"}\n");
}

// ============================================================================
// compact
// ============================================================================

#[test]
fn test_compact() {
    let dir = tempdir().unwrap();
    for (input, expected) in [
        ("999", "999\n"),
        ("1000", "1K\n"),
        ("1500", "1.5K\n"),
        ("1234567", "1.23M\n"),
        ("999999999999999", "1000T\n"),
    ] {
        arcadekit(dir.path())
            .args(["compact", input])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_compact_negative_is_usage_error() {
    let dir = tempdir().unwrap();
    arcadekit(dir.path())
        .args(["compact", "-5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: invalid number"));
}

#[test]
fn test_compact_nan_json_error() {
    let dir = tempdir().unwrap();
    arcadekit(dir.path())
        .args(["--format", "json", "compact", "NaN"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"invalid_value\""));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    arcadekit(dir.path())
        .args(["--quiet", "compact", "-5"])
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}
