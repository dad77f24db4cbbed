use crate::common;
use crate::common::command::{init_repository_dir, run_codat_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::add(&["add"])]
#[case::commit(&["commit"])]
#[case::show(&["show", "HEAD"])]
fn missing_argument_is_a_usage_error(init_repository_dir: TempDir, #[case] args: &[&str]) {
    let dir = init_repository_dir.path();

    run_codat_command(dir, args).assert().code(2);

    assert_eq!(common::read_repository_file(dir, "index"), "{}");
    assert_eq!(common::read_repository_file(dir, "commits"), "[]");
}
