use crate::common;
use crate::common::command::{codat_commit, init_repository_dir, run_codat_command};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_with_an_empty_index_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "unstaged".to_string()));

    codat_commit(dir, "empty")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nothing to commit"));

    assert_eq!(common::read_repository_file(dir, "commits"), "[]");
    assert_eq!(common::read_head(dir), "");
}

#[rstest]
fn commit_where_every_file_is_skipped_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "gone soon".to_string()));
    run_codat_command(dir, &["add", "a.txt"]).assert().success();
    delete_path(&dir.join("a.txt"));

    codat_commit(dir, "nothing readable")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nothing to commit"));

    assert_eq!(common::read_repository_file(dir, "commits"), "[]");
    assert_eq!(common::read_head(dir), "");
}

#[rstest]
fn commit_before_init_is_rejected() {
    let dir = TempDir::new().unwrap();

    codat_commit(dir.path(), "too early").assert().code(128);
    assert!(!dir.path().join(".codat").exists());
}
