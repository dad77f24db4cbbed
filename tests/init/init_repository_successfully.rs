use crate::common;
use crate::common::command::{repository_dir, run_codat_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_codat_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty codat repository in .+\.codat\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    assert!(repository_dir.path().join(".codat").is_dir());
    assert_eq!(common::read_repository_file(repository_dir.path(), "HEAD"), "");
    assert_eq!(common::read_repository_file(repository_dir.path(), "index"), "{}");
    assert_eq!(common::read_repository_file(repository_dir.path(), "commits"), "[]");

    Ok(())
}
