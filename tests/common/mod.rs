#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use ftag::domain::TagKind;
use ftag::infrastructure::{Repository, SqliteTagStore, TagStore};
use std::fs;
use std::path::{Path, PathBuf};

pub fn ftag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ftag").unwrap();
    cmd.env_remove("FTAG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn init_repo(root: &Path) {
    ftag_cmd().arg("init").arg(root).assert().success();
}

pub fn open_store(root: &Path) -> SqliteTagStore {
    Repository::new(root.to_path_buf()).open_store().unwrap()
}

/// Create a file with some content and return its path
pub fn touch(root: &Path, name: &str) -> PathBuf {
    let path = root.join(name);
    fs::write(&path, name).unwrap();
    path
}

/// Apply `tag` to `path`, creating the tag and tracking the file as needed
pub fn apply(store: &SqliteTagStore, path: &Path, tag: &str, kind: TagKind) {
    let file = store.track_path(path).unwrap();
    let tag = match store.tag_by_name(tag).unwrap() {
        Some(tag) => tag,
        None => store.add_tag(tag).unwrap(),
    };
    store.add_file_tag(file.id, tag.id, kind).unwrap();
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}
