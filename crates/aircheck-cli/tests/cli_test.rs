#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_stations_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("aircheck");
    cmd.args(["stations", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_plays_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("aircheck");
    cmd.args(["plays", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--station"))
        .stdout(predicate::str::contains("--hour"));
}

#[test]
fn test_track_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("aircheck");
    cmd.args(["track", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--track"));
}

#[test]
fn test_plays_missing_station() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("aircheck");
    cmd.args(["plays"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--station"));
}

#[test]
fn test_track_missing_track() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("aircheck");
    cmd.args(["track", "--station", "s1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--track"));
}

#[test]
fn test_stations_without_base_url_fails() {
    // Arrange: empty config dir so no base URL can be resolved
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("aircheck");
    cmd.args(["--dir", dir.path().to_str().unwrap(), "stations"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base URL not configured"));
}

#[test]
fn test_invalid_base_url_is_rejected() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("aircheck");
    cmd.args(["--base-url", "not a url", "stations"])
        .assert()
        .failure();
}
