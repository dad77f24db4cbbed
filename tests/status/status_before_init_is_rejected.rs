use crate::common::command::{repository_dir, run_codat_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn status_before_init_is_rejected(repository_dir: TempDir) {
    run_codat_command(repository_dir.path(), &["status"])
        .assert()
        .code(128)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error: not a codat repository"));
}
