use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::CodatError;
use colored::Colorize;
use std::collections::HashSet;
use std::io::Write;

impl Repository {
    pub async fn log(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;
        let _lock = self.lock_shared()?;

        self.commits_mut().rehydrate()?;

        let mut visited = HashSet::new();
        let mut curr_commit_hash = self.refs().read_head()?;

        while let Some(commit_hash) = curr_commit_hash {
            let commit = self
                .commits()
                .get(&commit_hash)
                .ok_or_else(|| CodatError::UnknownCommit(commit_hash.to_string()))?;

            if !visited.insert(commit_hash.clone()) {
                return Err(CodatError::CorruptState {
                    path: self.commits().path().to_path_buf(),
                    reason: format!("commit history loops back to {}", commit_hash),
                }
                .into());
            }

            self.show_commit_medium(commit)?;

            // Move to the parent commit for the next iteration
            curr_commit_hash = commit.parent().cloned();
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit.hash()).yellow()
        )?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;

        for line in commit.message().lines() {
            writeln!(self.writer(), "    {}", line)?;
        }
        writeln!(self.writer())?;

        Ok(())
    }
}
