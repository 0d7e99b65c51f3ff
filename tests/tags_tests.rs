//! Integration tests for tags command

#![allow(deprecated)]

use ftag::domain::TagKind;
use ftag::infrastructure::TagStore;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{apply, ftag_cmd, init_repo, open_store, stdout_of, touch};

#[test]
fn test_tags_all_lists_every_tag_in_name_order() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    {
        let store = open_store(temp.path());
        let file = touch(temp.path(), "a");
        apply(&store, &file, "zebra", TagKind::Explicit);
        apply(&store, &file, "apple", TagKind::Implicit);
    }

    ftag_cmd()
        .current_dir(temp.path())
        .args(["tags", "--all", "ignored-path"])
        .assert()
        .success()
        .stdout("apple\nzebra\n");
}

#[test]
fn test_directory_scan_suppresses_untracked_and_untagged() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    {
        let store = open_store(temp.path());
        apply(&store, &touch(temp.path(), "a"), "red", TagKind::Explicit);
        touch(temp.path(), "b");
        store.track_path(&touch(temp.path(), "c")).unwrap();
    }

    ftag_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("a: red\n")
        .stderr(predicate::str::contains("WARN").not());
}

#[test]
fn test_directory_scan_sorted_by_name() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    {
        let store = open_store(temp.path());
        for name in ["b.txt", "C.txt", "a.txt"] {
            apply(&store, &touch(temp.path(), name), "x", TagKind::Explicit);
        }
    }

    let stdout = stdout_of(ftag_cmd().current_dir(temp.path()).arg("tags"));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["C.txt: x", "a.txt: x", "b.txt: x"]);
}

#[test]
fn test_multiple_paths_print_empty_results() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    {
        let store = open_store(temp.path());
        let x = touch(temp.path(), "fileX");
        apply(&store, &x, "red", TagKind::Explicit);
        apply(&store, &x, "blue", TagKind::Explicit);
        store.track_path(&touch(temp.path(), "fileY")).unwrap();
    }

    ftag_cmd()
        .current_dir(temp.path())
        .args(["tags", "fileX", "fileY"])
        .assert()
        .success()
        .stdout("fileX: blue red\nfileY: \n");
}

#[test]
fn test_single_path_prints_one_tag_per_line() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    {
        let store = open_store(temp.path());
        let x = touch(temp.path(), "fileX");
        apply(&store, &x, "red", TagKind::Explicit);
        apply(&store, &x, "blue", TagKind::Explicit);
        store.track_path(&touch(temp.path(), "fileY")).unwrap();
    }

    ftag_cmd()
        .current_dir(temp.path())
        .args(["tags", "fileX"])
        .assert()
        .success()
        .stdout("blue\nred\n");

    ftag_cmd()
        .current_dir(temp.path())
        .args(["tags", "fileY"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_single_untracked_path_is_fatal() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    touch(temp.path(), "untracked.txt");

    ftag_cmd()
        .current_dir(temp.path())
        .args(["tags", "untracked.txt"])
        .assert()
        .code(5)
        .stdout("")
        .stderr(predicate::str::contains("untracked.txt: not tracked"));
}

#[test]
fn test_single_missing_path_is_fatal() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());

    ftag_cmd()
        .current_dir(temp.path())
        .args(["tags", "ghost.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost.txt: no such file"));
}

#[test]
fn test_multiple_paths_warn_and_continue() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    touch(temp.path(), "untracked.txt");
    {
        let store = open_store(temp.path());
        apply(&store, &touch(temp.path(), "other.txt"), "doc", TagKind::Explicit);
    }

    ftag_cmd()
        .current_dir(temp.path())
        .args(["tags", "untracked.txt", "other.txt"])
        .assert()
        .success()
        .stdout("other.txt: doc\n")
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("untracked.txt: not tracked"));
}

#[test]
fn test_explicit_flag_hides_implicit_tags() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    {
        let store = open_store(temp.path());
        let file = touch(temp.path(), "doc");
        apply(&store, &file, "p", TagKind::Explicit);
        apply(&store, &file, "q", TagKind::Implicit);
    }

    ftag_cmd()
        .current_dir(temp.path())
        .args(["tags", "--explicit", "doc"])
        .assert()
        .success()
        .stdout("p\n");

    ftag_cmd()
        .current_dir(temp.path())
        .args(["tags", "doc"])
        .assert()
        .success()
        .stdout("p\nq\n");

    ftag_cmd()
        .current_dir(temp.path())
        .args(["tags", "-e"])
        .assert()
        .success()
        .stdout("doc: p\n");
}

#[test]
fn test_only_implicitly_tagged_entry_hidden_in_explicit_scan() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    {
        let store = open_store(temp.path());
        apply(&store, &touch(temp.path(), "derived"), "q", TagKind::Implicit);
    }

    ftag_cmd()
        .current_dir(temp.path())
        .args(["tags", "--explicit"])
        .assert()
        .success()
        .stdout("");

    ftag_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("derived: q\n");
}

#[test]
fn test_directory_scan_lists_tagged_subdirectory() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    let dir = temp.path().join("holiday");
    fs::create_dir(&dir).unwrap();
    {
        let store = open_store(temp.path());
        apply(&store, &dir, "photos", TagKind::Explicit);
    }

    ftag_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("holiday: photos\n");
}

#[test]
fn test_verbose_reports_progress() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());

    ftag_cmd()
        .current_dir(temp.path())
        .args(["tags", "--all", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("retrieving all tags"));
}
