use crate::common;
use crate::common::command::{init_repository_dir, run_codat_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_a_non_existent_file_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    run_codat_command(dir, &["add", "a.txt"]).assert().success();
    let index_before = common::read_repository_file(dir, "index");

    run_codat_command(dir, &["add", "missing.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file not found: missing.txt"));

    assert_eq!(common::read_repository_file(dir, "index"), index_before);
}
