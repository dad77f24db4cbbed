use crate::areas::repository::Repository;
use crate::errors::CodatError;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        let repository_dir = self.repository_dir();

        if repository_dir.exists() {
            return Err(CodatError::AlreadyInitialized(repository_dir).into());
        }

        fs::create_dir_all(&repository_dir).context("Failed to create .codat directory")?;

        let _lock = self.lock_exclusive()?;

        self.refs()
            .clear_head()
            .context("Failed to create .codat/HEAD file")?;

        let index = self.index();
        let mut index = index.lock().await;
        index
            .write_updates()
            .context("Failed to create .codat/index file")?;

        self.commits_mut()
            .write_updates()
            .context("Failed to create .codat/commits file")?;

        writeln!(
            self.writer(),
            "Initialized empty codat repository in {}",
            repository_dir.display()
        )?;

        Ok(())
    }
}
