use crate::common::command::{init_repository_dir, run_codat_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_log_with_no_commits(init_repository_dir: TempDir) {
    run_codat_command(init_repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
