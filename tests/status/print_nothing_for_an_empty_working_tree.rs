use crate::common::command::{init_repository_dir, run_codat_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn print_nothing_for_an_empty_working_tree(init_repository_dir: TempDir) {
    run_codat_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::eq("nothing to report, working tree is empty\n"));
}
