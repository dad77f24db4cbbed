//! Commit log
//!
//! Ordered, append-only store of every commit ever created. Records are never
//! rewritten or removed; the only mutation is appending a new commit at the
//! end. Parent links are not validated on append.
//!
//! ## File Format
//!
//! A JSON array of commit records in append order (see `Commit`).

use crate::artifacts::core::write_atomic;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_hash::{CommitHash, MIN_PREFIX_LENGTH};
use crate::errors::CodatError;
use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct CommitLog {
    /// Path to the log file (typically `.codat/commits`)
    path: Box<Path>,
    commits: Vec<Commit>,
    /// Hash to position in `commits`, for constant-time parent lookups
    positions: HashMap<CommitHash, usize>,
}

impl CommitLog {
    pub fn new(path: Box<Path>) -> Self {
        CommitLog {
            path,
            commits: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the log from disk
    ///
    /// Unlike the index, an unreadable or malformed log is a hard error: the
    /// history cannot be silently replaced by an empty one.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        let content = std::fs::read(self.path())
            .with_context(|| format!("Unable to read commit log {}", self.path().display()))?;

        let commits = if content.iter().all(u8::is_ascii_whitespace) {
            Vec::new()
        } else {
            serde_json::from_slice::<Vec<Commit>>(&content).map_err(|error| {
                CodatError::CorruptState {
                    path: self.path().to_path_buf(),
                    reason: error.to_string(),
                }
            })?
        };

        self.positions = commits
            .iter()
            .enumerate()
            .map(|(position, commit)| (commit.hash().clone(), position))
            .collect();
        self.commits = commits;

        tracing::debug!(commits = self.commits.len(), "loaded commit log");

        Ok(())
    }

    /// Append a commit to the end of the log
    pub fn append(&mut self, commit: Commit) {
        self.positions
            .insert(commit.hash().clone(), self.commits.len());
        self.commits.push(commit);
    }

    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let content = serde_json::to_vec_pretty(&self.commits)?;
        write_atomic(self.path(), &content)?;

        Ok(())
    }

    pub fn position(&self, hash: &CommitHash) -> Option<usize> {
        self.positions.get(hash).copied()
    }

    pub fn get(&self, hash: &CommitHash) -> Option<&Commit> {
        self.position(hash).map(|position| &self.commits[position])
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Resolve a full hash or an unambiguous prefix of at least four characters
    pub fn resolve(&self, revision: &str) -> anyhow::Result<&Commit> {
        let revision = revision.trim();

        if let Ok(hash) = CommitHash::try_parse(revision.to_string())
            && let Some(commit) = self.get(&hash)
        {
            return Ok(commit);
        }

        if revision.len() < MIN_PREFIX_LENGTH || !revision.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(CodatError::UnknownCommit(revision.to_string()).into());
        }

        let mut candidates = self
            .commits
            .iter()
            .filter(|commit| commit.hash().starts_with(revision));

        match (candidates.next(), candidates.next()) {
            (Some(commit), None) => Ok(commit),
            (None, _) => Err(CodatError::UnknownCommit(revision.to_string()).into()),
            (Some(first), Some(second)) => Err(CodatError::AmbiguousCommit {
                prefix: revision.to_string(),
                candidates: [first, second]
                    .into_iter()
                    .chain(candidates)
                    .map(|commit| commit.hash().to_string())
                    .collect(),
            }
            .into()),
        }
    }
}
