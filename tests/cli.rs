//! Integration tests for the waitlist binary
//!
//! Each test runs against its own database and configuration path in a
//! temporary directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Command preconfigured with an isolated database and config file
fn waitlist(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("waitlist").unwrap();
    cmd.arg("--db")
        .arg(dir.path().join("waitlist.db"))
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_then_list() {
    let dir = tempdir().unwrap();

    waitlist(&dir)
        .args(["wait-list", "add", "movies", "Inception", "http://x"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully added entry `Inception` to wait list `movies`",
        ));

    waitlist(&dir)
        .args(["wait-list", "list", "movies", "--porcelain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inception"))
        .stdout(predicate::str::contains("None"));
}

#[test]
fn test_approve_twice_reports_already_approved() {
    let dir = tempdir().unwrap();

    waitlist(&dir)
        .args(["wait-list", "add", "movies", "Inception", "http://x"])
        .assert()
        .success();

    waitlist(&dir)
        .args(["wait-list", "approve", "movies", "Inception"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully marked pending entry Inception as approved",
        ));

    waitlist(&dir)
        .args(["wait-list", "approve", "movies", "Inception"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entry Inception is already approved"));
}

#[test]
fn test_default_list_name() {
    let dir = tempdir().unwrap();

    waitlist(&dir)
        .args(["wait-list", "add", "Inception", "http://x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wait list `wait_entries`"));

    waitlist(&dir)
        .args(["wait-list", "show", "Inception", "--porcelain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://x"));

    waitlist(&dir)
        .args(["wait-list", "all", "--porcelain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wait_entries"));
}

#[test]
fn test_missing_entry_is_not_a_failure() {
    let dir = tempdir().unwrap();

    waitlist(&dir)
        .args(["wait-list", "add", "movies", "Inception", "http://x"])
        .assert()
        .success();

    waitlist(&dir)
        .args(["wait-list", "del", "movies", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Could not find matching wait entry with ID 42 in list `movies`",
        ));

    waitlist(&dir)
        .args(["wait-list", "purge", "shows"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Could not find wait list with name `shows`",
        ));
}

#[test]
fn test_malformed_attribute_is_usage_error() {
    let dir = tempdir().unwrap();

    waitlist(&dir)
        .args([
            "wait-list",
            "add",
            "movies",
            "Inception",
            "http://x",
            "--attributes",
            "imdb_id",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Received attribute in wrong format"));

    // Nothing was stored
    waitlist(&dir)
        .args(["wait-list", "list", "movies"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not find wait list"));
}

#[test]
fn test_purge_removes_entries() {
    let dir = tempdir().unwrap();

    for title in ["Inception", "Heat"] {
        waitlist(&dir)
            .args(["wait-list", "add", "movies", title, "http://x"])
            .assert()
            .success();
    }

    waitlist(&dir)
        .args(["wait-list", "purge", "movies"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleting list movies"));

    waitlist(&dir)
        .args(["wait-list", "all", "--porcelain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("movies").not());
}

#[test]
fn test_config_show() {
    let dir = tempdir().unwrap();

    waitlist(&dir)
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"default_list\""));
}
