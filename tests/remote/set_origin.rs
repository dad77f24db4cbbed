use crate::common;
use crate::common::command::{init_repository_dir, repository_dir, run_codat_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn set_origin_stores_the_link(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_codat_command(dir, &["set-origin", "http://localhost:3000/codat/65f1c2ab"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Origin set to http://localhost:3000/codat/65f1c2ab",
        ));

    assert_eq!(
        common::read_repository_file(dir, "ORIGIN"),
        "http://localhost:3000/codat/65f1c2ab"
    );
    // HEAD belongs to the commit log
    assert_eq!(common::read_head(dir), "");
}

#[rstest]
#[case::other_remote("http://example.com/codat/65f1c2ab")]
#[case::missing_id("http://localhost:3000/codat/")]
#[case::garbage("not a link")]
fn set_origin_with_an_invalid_link_is_rejected(
    init_repository_dir: TempDir,
    #[case] link: &str,
) {
    let dir = init_repository_dir.path();

    run_codat_command(dir, &["set-origin", link])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid codat link"));

    assert!(!dir.join(".codat").join("ORIGIN").exists());
}

#[rstest]
fn set_origin_before_init_is_rejected(repository_dir: TempDir) {
    run_codat_command(
        repository_dir.path(),
        &["set-origin", "http://localhost:3000/codat/65f1c2ab"],
    )
    .assert()
    .code(128);
}
