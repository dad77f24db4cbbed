use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::delta::LineDeltaCodec;
use crate::artifacts::objects::commit_hash::CommitHash;
use crate::artifacts::reconstruct::Reconstructor;
use crate::errors::CodatError;
use anyhow::Context;
use std::io::Write;

impl Repository {
    pub async fn show(&mut self, revision: &str, file_path: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;
        let _lock = self.lock_shared()?;

        self.commits_mut().rehydrate()?;

        let hash = self.resolve_revision(revision)?;
        let name = self.workspace().normalize_name(file_path)?;

        let codec = LineDeltaCodec;
        let content = Reconstructor::new(self.commits(), &codec)
            .reconstruct(&hash, &name)
            .with_context(|| format!("Unable to reconstruct {} at {}", name, hash))?;

        write!(self.writer(), "{}", content)?;

        Ok(())
    }

    /// Resolve `HEAD`, a full commit hash or a unique prefix of one
    fn resolve_revision(&self, revision: &str) -> anyhow::Result<CommitHash> {
        if revision.trim().eq_ignore_ascii_case(HEAD_REF_NAME) {
            return self
                .refs()
                .read_head()?
                .ok_or_else(|| CodatError::UnknownCommit(HEAD_REF_NAME.to_string()).into());
        }

        Ok(self.commits().resolve(revision)?.hash().clone())
    }
}
