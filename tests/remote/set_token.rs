use crate::common::command::{config_dir, repository_dir, run_codat_command_with_config};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Word;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn set_token_writes_the_credential_file(repository_dir: TempDir, config_dir: TempDir) {
    let token = format!("{}-{}", Word().fake::<String>(), 4242);
    let config_path = config_dir.path().join("codat");

    run_codat_command_with_config(repository_dir.path(), &config_path, &["set-token", &token])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token set successfully in"))
        .stdout(predicate::str::contains(token.as_str()).not());

    assert_eq!(
        std::fs::read_to_string(config_path.join("config")).unwrap(),
        format!("token={token}\n")
    );
}
