use crate::common::command::{repository_dir, run_codat_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::other_remote("http://example.com/codat/abc")]
#[case::wrong_segment("http://localhost:3000/snippets/abc")]
fn clone_with_an_invalid_link_is_rejected(repository_dir: TempDir, #[case] link: &str) {
    run_codat_command(repository_dir.path(), &["clone", link])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid codat link"));

    assert!(std::fs::read_dir(repository_dir.path()).unwrap().next().is_none());
}
