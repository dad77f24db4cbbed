#![cfg(unix)]

use crate::common;
use crate::common::command::{init_repository_dir, run_codat_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::{PathChild, SymlinkToFile};
use codat::artifacts::objects::fingerprint::Fingerprint;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn symlinked_file_is_tracked_as_the_link(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    init_repository_dir
        .child("link.txt")
        .symlink_to_file(dir.join("a.txt"))
        .unwrap();

    run_codat_command(dir, &["add", "a.txt"]).assert().success();
    run_codat_command(dir, &["add", "link.txt"]).assert().success();

    let fingerprint = Fingerprint::of("hello").to_string();
    assert_eq!(
        common::read_index(dir),
        serde_json::json!({ "a.txt": fingerprint, "link.txt": fingerprint })
    );

    let actual_output = stdout_of(&mut run_codat_command(dir, &["status"]));
    assert_eq!(
        actual_output,
        "Unchanged files:\n        unchanged:  a.txt\n        unchanged:  link.txt\n"
    );
}
