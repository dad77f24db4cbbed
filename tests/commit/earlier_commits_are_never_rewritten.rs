use crate::common;
use crate::common::command::{codat_commit, init_repository_dir, run_codat_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::{Sentence, Words};
use pretty_assertions::assert_eq;
use rstest::rstest;

const COMMITS: usize = 4;

#[rstest]
fn earlier_commits_are_never_rewritten(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let mut snapshots: Vec<Vec<serde_json::Value>> = Vec::new();

    for _ in 0..COMMITS {
        let content = Words(3..8).fake::<Vec<String>>().join("\n");
        write_file(FileSpec::new(dir.join("notes.txt"), content));
        run_codat_command(dir, &["add", "notes.txt"]).assert().success();

        let message = Sentence(2..5).fake::<String>();
        codat_commit(dir, &message).assert().success();

        let commits = common::read_commits(dir);

        // HEAD always names the newest record
        assert_eq!(
            common::read_head(dir),
            commits.last().unwrap()["Hash"].as_str().unwrap()
        );

        snapshots.push(commits);
    }

    let last = snapshots.last().unwrap();
    assert_eq!(last.len(), COMMITS);

    for (count, snapshot) in snapshots.iter().enumerate() {
        assert_eq!(snapshot.len(), count + 1);
        assert_eq!(&last[..snapshot.len()], &snapshot[..]);
    }

    for pair in last.windows(2) {
        assert_eq!(pair[1]["ParentHash"], pair[0]["Hash"]);
    }
}
