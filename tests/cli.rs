use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A passgen command isolated from the user's config directory.
fn passgen_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("passgen").unwrap();
    cmd.env("PASSGEN_CONFIG_DIR", config_dir.path());
    cmd
}

fn stdout_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_no_arguments_prints_usage() {
    let temp = TempDir::new().unwrap();
    passgen_cmd(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_non_integer_length_fails() {
    let temp = TempDir::new().unwrap();
    passgen_cmd(&temp)
        .arg("eight")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_negative_length_fails() {
    let temp = TempDir::new().unwrap();
    passgen_cmd(&temp)
        .args(["-5", "--nocp"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid password length"));
}

#[test]
fn test_huge_length_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    passgen_cmd(&temp)
        .args(["9223372036854775807", "-n"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_nocp_prints_password() {
    let temp = TempDir::new().unwrap();
    let assert = passgen_cmd(&temp)
        .args(["20", "--nocp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Info: Copy to clipboard disabled"));

    let lines = stdout_lines(&assert.get_output().stdout);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "------- Password Generator -------");
    assert_eq!(lines[2].chars().count(), 20);
    assert_eq!(lines[3], "-".repeat(34));
}

#[test]
fn test_short_nocp_flag() {
    let temp = TempDir::new().unwrap();
    passgen_cmd(&temp)
        .args(["-n", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Info: Copy to clipboard disabled"));
}

#[test]
fn test_zero_length_prints_empty_password() {
    let temp = TempDir::new().unwrap();
    let assert = passgen_cmd(&temp).args(["0", "-n"]).assert().success();

    let lines = stdout_lines(&assert.get_output().stdout);
    assert_eq!(lines[2], "");
}

#[test]
fn test_password_uses_pool_characters() {
    let temp = TempDir::new().unwrap();
    let assert = passgen_cmd(&temp).args(["200", "-n"]).assert().success();

    let lines = stdout_lines(&assert.get_output().stdout);
    let allowed = |c: char| c.is_ascii_alphanumeric() || "!#$%&()*+-=?@_".contains(c);
    assert!(lines[2].chars().all(allowed));
}

#[test]
fn test_consecutive_runs_differ() {
    let temp = TempDir::new().unwrap();
    let run = || {
        let assert = passgen_cmd(&temp).args(["24", "-n"]).assert().success();
        stdout_lines(&assert.get_output().stdout)[2].clone()
    };
    assert_ne!(run(), run());
}

#[test]
fn test_config_can_disable_copy() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{"copy_to_clipboard": false}"#,
    )
    .unwrap();

    passgen_cmd(&temp)
        .arg("12")
        .assert()
        .success()
        .stdout(predicate::str::contains("Info: Copy to clipboard disabled"));
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), "{ nope").unwrap();

    passgen_cmd(&temp)
        .args(["12", "-n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Info: Copy to clipboard disabled"));
}

// Windows resolves `clip` from the system directory regardless of PATH.
#[cfg(not(windows))]
#[test]
fn test_missing_clipboard_tool_is_not_fatal() {
    let temp = TempDir::new().unwrap();
    let empty_path = TempDir::new().unwrap();

    let assert = passgen_cmd(&temp)
        .env("PATH", empty_path.path())
        .arg("16")
        .assert()
        .success()
        .stdout(predicate::str::contains("Info: Copy to clipboard failed"))
        .stderr(predicate::str::contains("Warning: Failed to copy to clipboard"));

    let lines = stdout_lines(&assert.get_output().stdout);
    assert_eq!(lines[2].chars().count(), 16);
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    passgen_cmd(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
