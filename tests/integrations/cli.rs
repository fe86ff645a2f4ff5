//! Binary-level tests. The notification bus environment variables are
//! stripped so every run exercises the capability-absent path, which the
//! notifier must tolerate silently.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn studybell() -> Command {
    let mut cmd = Command::cargo_bin("studybell").unwrap();
    // No session bus reachable: the notification capability is absent.
    cmd.env_remove("DBUS_SESSION_BUS_ADDRESS")
        .env_remove("XDG_RUNTIME_DIR");
    cmd
}

#[test]
fn status_reports_unavailable_capability() {
    let dir = tempdir().unwrap();

    studybell()
        .arg("--status")
        .arg("--state-file")
        .arg(dir.path().join("permission.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Notification capability: unavailable"))
        .stdout(predicate::str::contains("Permission: default"));
}

#[test]
fn no_arguments_defaults_to_status() {
    let dir = tempdir().unwrap();

    studybell()
        .arg("--state-file")
        .arg(dir.path().join("permission.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Notification capability:"));
}

#[test]
fn showing_without_permission_exits_cleanly() {
    let dir = tempdir().unwrap();

    // Capability absent, permission undecided: the message is silently
    // dropped and the exit code is still success.
    studybell()
        .arg("You did not study Math for 3 days")
        .arg("--state-file")
        .arg(dir.path().join("permission.toml"))
        .assert()
        .success();
}

#[test]
fn reset_removes_the_state_file() {
    let dir = tempdir().unwrap();
    let state_file = dir.path().join("permission.toml");
    std::fs::write(&state_file, "permission = \"denied\"\n").unwrap();

    studybell()
        .arg("--reset")
        .arg("--state-file")
        .arg(&state_file)
        .assert()
        .success();

    assert!(!state_file.exists());
}

#[test]
fn unreadable_config_file_fails_startup() {
    studybell()
        .arg("--config")
        .arg("/nonexistent/studybell.toml")
        .assert()
        .failure();
}
