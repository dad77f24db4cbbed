use crate::common::command::{repository_dir, run_codat_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_before_init_is_rejected(repository_dir: TempDir) {
    let dir = repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));

    run_codat_command(dir, &["add", "a.txt"])
        .assert()
        .code(128)
        .stderr(predicate::str::contains("not a codat repository"));

    assert!(!dir.join(".codat").exists());
}
