use crate::common;
use crate::common::command::{init_repository_dir, run_codat_command};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use codat::artifacts::objects::fingerprint::Fingerprint;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_single_file_to_index_successfully(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));

    run_codat_command(dir, &["add", "a.txt"]).assert().success();

    assert_eq!(
        common::read_index(dir),
        serde_json::json!({ "a.txt": "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d" })
    );
}

#[rstest]
fn add_multiple_files_incrementally(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let files = write_generated_files(dir, 3);
    let nested = FileSpec::new(dir.join("nested").join("deep.txt"), "deep".to_string());
    write_file(nested.clone());

    let mut expected = serde_json::Map::new();
    for file in files.iter().chain(std::iter::once(&nested)) {
        let name = file
            .path
            .strip_prefix(dir)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");

        run_codat_command(dir, &["add", &name]).assert().success();
        expected.insert(name, Fingerprint::of(&file.content).to_string().into());
    }

    assert_eq!(common::read_index(dir), serde_json::Value::Object(expected));
}

#[rstest]
fn re_adding_a_file_replaces_its_fingerprint(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    run_codat_command(dir, &["add", "a.txt"]).assert().success();

    write_file(FileSpec::new(dir.join("a.txt"), "world".to_string()));
    run_codat_command(dir, &["add", "./a.txt"]).assert().success();

    assert_eq!(
        common::read_index(dir),
        serde_json::json!({ "a.txt": Fingerprint::of("world").to_string() })
    );
}
