//! Integration tests for init and repository discovery

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{ftag_cmd, init_repo};

#[test]
fn test_init_creates_config_and_database() {
    let temp = TempDir::new().unwrap();

    ftag_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized ftag repository"));

    assert!(temp.path().join(".ftag").is_dir());
    assert!(temp.path().join(".ftag/ftag.db").is_file());

    let content = fs::read_to_string(temp.path().join(".ftag/config.toml")).unwrap();
    assert!(content.contains("database = \"ftag.db\""));
    assert!(content.contains("created"));
}

#[test]
fn test_init_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("new").join("repo");

    init_repo(&target);

    assert!(target.join(".ftag/config.toml").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());

    ftag_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_commands_outside_repository_fail() {
    let temp = TempDir::new().unwrap();

    ftag_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not an ftag directory"))
        .stderr(predicate::str::contains("ftag init"));
}

#[test]
fn test_discovers_repository_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    let nested = temp.path().join("photos");
    fs::create_dir(&nested).unwrap();

    ftag_cmd()
        .current_dir(&nested)
        .arg("tags")
        .arg("--all")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_ftag_root_overrides_discovery() {
    let repo = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_repo(repo.path());

    let file = common::touch(elsewhere.path(), "notes.txt");
    ftag_cmd()
        .current_dir(elsewhere.path())
        .env("FTAG_ROOT", repo.path())
        .arg("tag")
        .arg(&file)
        .arg("todo")
        .assert()
        .success();

    ftag_cmd()
        .current_dir(repo.path())
        .args(["tags", "--all"])
        .assert()
        .success()
        .stdout("todo\n");
}

#[test]
fn test_ftag_root_without_repository_fails() {
    let temp = TempDir::new().unwrap();

    ftag_cmd()
        .env("FTAG_ROOT", temp.path())
        .args(["tags", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FTAG_ROOT is set"));
}
