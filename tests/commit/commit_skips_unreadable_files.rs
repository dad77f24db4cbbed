use crate::common;
use crate::common::command::{codat_commit, init_repository_dir, run_codat_command};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_skips_unreadable_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "alpha\n".to_string()));
    write_file(FileSpec::new(dir.join("b.txt"), "beta\n".to_string()));
    run_codat_command(dir, &["add", "a.txt"]).assert().success();
    run_codat_command(dir, &["add", "b.txt"]).assert().success();

    delete_path(&dir.join("b.txt"));

    codat_commit(dir, "partial")
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: skipping b.txt"))
        .stdout(predicate::str::contains("] partial"));

    let commits = common::read_commits(dir);
    assert_eq!(commits.len(), 1);

    let deltas = commits[0]["Deltas"].as_object().unwrap();
    assert_eq!(deltas.keys().collect::<Vec<_>>(), vec!["a.txt"]);
}
