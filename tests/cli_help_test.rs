//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("raclaunch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remote access connection launcher"));
}

#[test]
fn test_launch_help() {
    Command::cargo_bin("raclaunch")
        .unwrap()
        .args(["launch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pick an endpoint"))
        .stdout(predicate::str::contains("--new-tab"));
}

#[test]
fn test_endpoints_help() {
    Command::cargo_bin("raclaunch")
        .unwrap()
        .args(["endpoints", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--page"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_missing_url_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("raclaunch")
        .unwrap()
        .args(["endpoints", "desktops"])
        .env_remove("RACLAUNCH_URL")
        .env_remove("RACLAUNCH_TOKEN")
        .env("RACLAUNCH_CONFIG", dir.path().join("config.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("console URL is not set"));
}

#[test]
fn test_page_zero_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("raclaunch")
        .unwrap()
        .args([
            "endpoints",
            "--provider",
            "7",
            "--page",
            "0",
            "--url",
            "http://127.0.0.1:9",
        ])
        .env("RACLAUNCH_CONFIG", dir.path().join("config.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page number: 0"));
}
