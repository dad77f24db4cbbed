use crate::areas::repository::Repository;
use crate::artifacts::delta::{DeltaCodec, LineDeltaCodec};
use crate::artifacts::objects::commit::{Commit, DeltaSet};
use crate::artifacts::reconstruct::Reconstructor;
use crate::errors::CodatError;
use anyhow::Context;
use std::io::Write;

impl Repository {
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;
        let _lock = self.lock_exclusive()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file and the commit log from the disk
        index.rehydrate();
        self.commits_mut().rehydrate()?;

        let parent = self.refs().read_head()?;
        if let Some(parent) = &parent
            && self.commits().get(parent).is_none()
        {
            return Err(CodatError::CorruptState {
                path: self.refs().head_path().to_path_buf(),
                reason: format!("HEAD references unknown commit {}", parent),
            }
            .into());
        }

        let codec = LineDeltaCodec;
        let mut deltas = DeltaSet::new();

        // Every staged file is diffed against its content at HEAD; a file
        // that cannot be read or rebuilt is skipped, not fatal
        let mut reconstructor = Reconstructor::new(self.commits(), &codec);
        for name in index.names() {
            let current = match self.workspace().read_text(&name) {
                Ok(current) => current,
                Err(error) => {
                    tracing::warn!(
                        file = %name,
                        error = %format!("{error:#}"),
                        "skipping unreadable file"
                    );
                    writeln!(self.writer(), "warning: skipping {}: {:#}", name, error)?;
                    continue;
                }
            };

            let base = match reconstructor.reconstruct_at(parent.as_ref(), &name) {
                Ok(base) => base,
                Err(error) => {
                    tracing::warn!(file = %name, %error, "skipping file with a broken history");
                    writeln!(self.writer(), "warning: skipping {}: {}", name, error)?;
                    continue;
                }
            };

            deltas.insert(name, codec.compute(&base, &current));
        }
        drop(reconstructor);

        if deltas.is_empty() {
            return Err(CodatError::NothingToCommit.into());
        }

        let commit = Commit::new(message.trim().to_string(), deltas, parent.clone());
        let hash = commit.hash().clone();
        let short_message = commit.short_message().to_string();

        // The log must hold the commit before HEAD points at it
        self.commits_mut().append(commit);
        self.commits_mut()
            .write_updates()
            .context("Failed to write the commit log")?;
        self.refs().update_head(&hash)?;

        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            hash.to_short_hash(),
            short_message
        )?;

        Ok(())
    }
}
