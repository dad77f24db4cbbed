//! Content reconstruction
//!
//! A file's content at a commit is rebuilt by walking parent links back to
//! the root (where the content is empty) and then replaying the file's
//! deltas from the oldest commit forward to the requested one.
//!
//! The walk is an explicit loop over commit positions, so long histories do
//! not grow the stack. Every intermediate result is memoised per
//! `(commit, filename)` for the lifetime of the `Reconstructor`, which is one
//! command invocation; a later query stops walking as soon as it reaches a
//! commit it has already rebuilt.
//!
//! Failures are scoped to the `(commit, filename)` pair being rebuilt:
//! nothing is cached past the failing link and other files are unaffected.

use crate::areas::commits::CommitLog;
use crate::artifacts::delta::{DeltaCodec, DeltaError};
use crate::artifacts::objects::commit_hash::CommitHash;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// What a commit without a delta for the requested file contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingDeltaPolicy {
    /// The file keeps the content it had at the parent commit.
    #[default]
    CarryForward,
    /// The file is considered empty at that commit (the historical behaviour,
    /// which loses content for files untouched by an intermediate commit).
    Reset,
}

#[derive(Debug, Error)]
pub enum ReconstructError {
    #[error("unknown commit {0}")]
    UnknownCommit(CommitHash),

    #[error("commit {commit} references missing parent {parent}")]
    BrokenChain {
        commit: CommitHash,
        parent: CommitHash,
    },

    #[error("commit history loops back to {0}")]
    Cycle(CommitHash),

    #[error("cannot apply delta for {filename} at commit {commit}: {source}")]
    Delta {
        commit: CommitHash,
        filename: String,
        #[source]
        source: DeltaError,
    },
}

pub struct Reconstructor<'r, C: DeltaCodec> {
    log: &'r CommitLog,
    codec: &'r C,
    policy: MissingDeltaPolicy,
    /// filename -> commit position -> content
    cache: HashMap<String, HashMap<usize, String>>,
}

impl<'r, C: DeltaCodec> Reconstructor<'r, C> {
    pub fn new(log: &'r CommitLog, codec: &'r C) -> Self {
        Reconstructor {
            log,
            codec,
            policy: MissingDeltaPolicy::default(),
            cache: HashMap::new(),
        }
    }

    pub fn with_policy(mut self, policy: MissingDeltaPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Content of `filename` at `head`; empty when there is no commit yet
    pub fn reconstruct_at(
        &mut self,
        head: Option<&CommitHash>,
        filename: &str,
    ) -> Result<String, ReconstructError> {
        match head {
            Some(hash) => self.reconstruct(hash, filename),
            None => Ok(String::new()),
        }
    }

    /// Content of `filename` as of commit `hash`
    pub fn reconstruct(
        &mut self,
        hash: &CommitHash,
        filename: &str,
    ) -> Result<String, ReconstructError> {
        let target = self
            .log
            .position(hash)
            .ok_or_else(|| ReconstructError::UnknownCommit(hash.clone()))?;

        let (chain, mut content) = self.collect_chain(target, filename)?;

        tracing::debug!(
            commit = %hash,
            filename,
            replayed = chain.len(),
            "reconstructing file content"
        );

        // chain runs newest to oldest; replay it oldest first
        for position in chain.into_iter().rev() {
            let commit = &self.log.commits()[position];

            content = match commit.delta_for(filename) {
                Some(delta) => self.codec.apply(&content, delta).map_err(|source| {
                    ReconstructError::Delta {
                        commit: commit.hash().clone(),
                        filename: filename.to_string(),
                        source,
                    }
                })?,
                None => match self.policy {
                    MissingDeltaPolicy::CarryForward => content,
                    MissingDeltaPolicy::Reset => String::new(),
                },
            };

            self.cache
                .entry(filename.to_string())
                .or_default()
                .insert(position, content.clone());
        }

        Ok(content)
    }

    /// Walk parent links from `target` until the root or a memoised commit.
    ///
    /// Returns the positions still to replay (newest first) and the content
    /// to start replaying from.
    fn collect_chain(
        &self,
        target: usize,
        filename: &str,
    ) -> Result<(Vec<usize>, String), ReconstructError> {
        let cached = self.cache.get(filename);
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut cursor = Some(target);

        while let Some(position) = cursor {
            if let Some(content) = cached.and_then(|contents| contents.get(&position)) {
                return Ok((chain, content.clone()));
            }

            let commit = &self.log.commits()[position];
            if !visited.insert(position) {
                return Err(ReconstructError::Cycle(commit.hash().clone()));
            }
            chain.push(position);

            cursor = match commit.parent() {
                None => None,
                Some(parent) => Some(self.log.position(parent).ok_or_else(|| {
                    ReconstructError::BrokenChain {
                        commit: commit.hash().clone(),
                        parent: parent.clone(),
                    }
                })?),
            };
        }

        Ok((chain, String::new()))
    }
}
