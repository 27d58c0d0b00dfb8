//! Integration tests for the escapes CLI.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::run_escapes;

fn escapes() -> Command {
    let mut cmd = Command::cargo_bin("escapes").unwrap();
    cmd.env_remove("ESCAPES_LOG")
        .env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_escapes(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("cursor-pos"));
    assert!(stdout.contains("named"));
    assert!(stdout.contains("image"));
}

#[test]
fn no_arguments_shows_usage() {
    let (_stdout, stderr, exit_code) = run_escapes(&[]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}

// ============================================================================
// Raw Output Tests
// ============================================================================

#[test]
fn named_prints_raw_sequence() {
    escapes()
        .args(["named", "cursor-hide"])
        .assert()
        .success()
        .stdout("\x1b[?25l");
}

#[test]
fn cursor_pos_prints_row_first() {
    escapes()
        .args(["cursor-pos", "4", "2"])
        .assert()
        .success()
        .stdout("\x1b[3;5H");
}

#[test]
fn cursor_move_accepts_negative_values() {
    escapes()
        .args(["cursor-move", "2", "-4"])
        .assert()
        .success()
        .stdout("\x1b[2C\x1b[4A");
}

#[test]
fn scroll_zero_prints_nothing() {
    escapes().args(["scroll", "0"]).assert().success().stdout("");
}

#[test]
fn delete_chars_passes_negative_through() {
    escapes()
        .args(["delete-chars", "-2"])
        .assert()
        .success()
        .stdout("\x1b[-2P");
}

#[test]
fn link_prints_osc8() {
    escapes()
        .args(["link", "http://x", "t"])
        .assert()
        .success()
        .stdout("\x1b]8;;http://x\x07t\x1b]8;;\x07");
}

#[test]
fn cwd_with_explicit_dir() {
    escapes()
        .args(["cwd", "/tmp"])
        .assert()
        .success()
        .stdout("\x1b]50;CurrentDir=/tmp\x07");
}

#[test]
fn cwd_defaults_to_current_dir() {
    let dir = TempDir::new().unwrap();
    let expected = format!(
        "\x1b]50;CurrentDir={}\x07",
        dir.path().canonicalize().unwrap().display()
    );

    escapes()
        .current_dir(dir.path().canonicalize().unwrap())
        .arg("cwd")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

// ============================================================================
// Escaped Output Tests
// ============================================================================

#[test]
fn escaped_flag_prints_visible_form() {
    escapes()
        .args(["--escaped", "--newline", "named", "text-color-bright-red"])
        .assert()
        .success()
        .stdout("\\x1b[31;1m\n");
}

#[test]
fn escaped_flag_after_subcommand() {
    escapes()
        .args(["scroll", "-5", "-e"])
        .assert()
        .success()
        .stdout("\\x1b[5T");
}

// ============================================================================
// Image Tests
// ============================================================================

#[test]
fn image_reads_file_and_encodes_base64() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pixel.bin");
    fs::write(&path, b"abc").unwrap();

    escapes()
        .arg("image")
        .arg(&path)
        .args(["--height", "10", "--width", "20"])
        .assert()
        .success()
        .stdout("\x1b]1337;File=inline=1;width=10;height=20:YWJj\x07");
}

#[test]
fn image_without_aspect_ratio() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pixel.bin");
    fs::write(&path, b"abc").unwrap();

    escapes()
        .arg("image")
        .arg(&path)
        .arg("--no-preserve-aspect-ratio")
        .assert()
        .success()
        .stdout("\x1b]1337;File=inline=1;preserveAspectRatio=0:YWJj\x07");
}

#[test]
fn image_missing_file_fails() {
    escapes()
        .args(["image", "/nonexistent/missing.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read image"))
        .stderr(predicate::str::contains("missing.png"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn unknown_name_fails_with_hint() {
    escapes()
        .args(["named", "cursor-sideways"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Unknown sequence: cursor-sideways"))
        .stderr(predicate::str::contains("escapes list"));
}

#[test]
fn non_numeric_argument_is_usage_error() {
    escapes()
        .args(["scroll", "lots"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

// ============================================================================
// List Tests
// ============================================================================

#[test]
fn list_shows_escaped_values() {
    escapes()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("cursor-up"))
        .stdout(predicate::str::contains("\\x1b[?12I"))
        .stdout(predicate::str::contains("clear-screen"));
}

#[test]
fn list_filters_by_category() {
    let (stdout, _stderr, exit_code) = run_escapes(&["list", "--category", "scroll"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 2);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    scroll-up    scroll      \x1b[S
    scroll-down  scroll      \x1b[T
    ");
}

#[test]
fn list_json_is_parseable() {
    let (stdout, _stderr, exit_code) = run_escapes(&["list", "--json", "-c", "reset"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "color-reset");
    assert_eq!(entries[0]["category"], "reset");
    assert_eq!(entries[0]["value"], "\x1b[0m");
    assert_eq!(entries[1]["value"], "\x1bc");
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_file_enables_escaped_output() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[output]\nescaped = true\nnewline = true\n").unwrap();

    escapes()
        .arg("--config")
        .arg(&config)
        .args(["named", "erase-line"])
        .assert()
        .success()
        .stdout("\\x1b[2K\n");
}

// dirs only honors XDG_CONFIG_HOME on Linux.
#[cfg(target_os = "linux")]
#[test]
fn default_config_location_is_read() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("escapes");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[output]\nnewline = true\n").unwrap();

    Command::cargo_bin("escapes")
        .unwrap()
        .env("XDG_CONFIG_HOME", home.path())
        .args(["named", "cursor-up"])
        .assert()
        .success()
        .stdout("\x1b[A\n");
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[output]\nescaped = 3\n").unwrap();

    escapes()
        .arg("--config")
        .arg(&config)
        .args(["named", "cursor-up"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_bash() {
    escapes()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("escapes"));
}
