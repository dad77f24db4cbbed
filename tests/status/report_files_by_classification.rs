use crate::common::command::{
    init_repository_dir, repository_with_two_commits, run_codat_command, stdout_of,
};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_files_with_modified_contents(repository_with_two_commits: TempDir) {
    let dir = repository_with_two_commits.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello again".to_string()));

    let actual_output = stdout_of(&mut run_codat_command(dir, &["status"]));

    assert_eq!(actual_output, "Modified files:\n        modified:   a.txt\n");
}

#[rstest]
fn report_deleted_files_as_missing(repository_with_two_commits: TempDir) {
    let dir = repository_with_two_commits.path();
    delete_path(&dir.join("a.txt"));

    let actual_output = stdout_of(&mut run_codat_command(dir, &["status"]));

    assert_eq!(actual_output, "Missing files:\n        missing:    a.txt\n");
}

#[rstest]
fn list_files_as_untracked_if_they_are_not_in_the_index(
    repository_with_two_commits: TempDir,
) {
    let dir = repository_with_two_commits.path();
    write_file(FileSpec::new(dir.join("b.txt"), "bee".to_string()));

    let actual_output = stdout_of(&mut run_codat_command(dir, &["status"]));

    assert_eq!(
        actual_output,
        "Untracked files:\n        b.txt\n\nUnchanged files:\n        unchanged:  a.txt\n"
    );
}

#[rstest]
fn report_every_classification_in_name_order(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    for name in ["d.txt", "a.txt", "c.txt", "e.txt"] {
        write_file(FileSpec::new(dir.join(name), format!("{name} v1")));
        run_codat_command(dir, &["add", name]).assert().success();
    }

    write_file(FileSpec::new(dir.join("e.txt"), "e.txt v2".to_string()));
    write_file(FileSpec::new(dir.join("a.txt"), "a.txt v2".to_string()));
    delete_path(&dir.join("c.txt"));
    write_file(FileSpec::new(dir.join("z.txt"), "new".to_string()));
    write_file(FileSpec::new(dir.join("sub").join("b.txt"), "nested".to_string()));

    let actual_output = stdout_of(&mut run_codat_command(dir, &["status"]));

    let expected_output = "\
Modified files:
        modified:   a.txt
        modified:   e.txt

Missing files:
        missing:    c.txt

Untracked files:
        sub/b.txt
        z.txt

Unchanged files:
        unchanged:  d.txt
";
    assert_eq!(actual_output, expected_output);
}
