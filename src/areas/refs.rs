//! Repository pointers (HEAD, ORIGIN)
//!
//! Both pointers are raw text files inside the repository directory:
//! - `HEAD`: empty, or the hash of the most recently created commit
//! - `ORIGIN`: empty, or the codat link `push` submits to

use crate::artifacts::core::write_atomic;
use crate::artifacts::objects::commit_hash::CommitHash;
use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// Name of the HEAD pointer file
pub const HEAD_REF_NAME: &str = "HEAD";
const ORIGIN_REF_NAME: &str = "ORIGIN";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.codat`)
    path: Box<Path>,
}

impl Refs {
    /// Read the newest commit hash; `None` when no commit exists yet
    pub fn read_head(&self) -> anyhow::Result<Option<CommitHash>> {
        match self.read_ref_file(&self.head_path())? {
            Some(content) => Ok(Some(
                CommitHash::try_parse(content).context("HEAD does not hold a commit hash")?,
            )),
            None => Ok(None),
        }
    }

    /// Point HEAD at `hash`
    ///
    /// Callers must only do this once the commit is durably in the log.
    pub fn update_head(&self, hash: &CommitHash) -> anyhow::Result<()> {
        write_atomic(&self.head_path(), hash.as_ref().as_bytes())
            .with_context(|| format!("failed to update HEAD to {}", hash))
    }

    /// Reset HEAD to the "no commits" state
    pub fn clear_head(&self) -> anyhow::Result<()> {
        write_atomic(&self.head_path(), b"").context("failed to create HEAD")
    }

    pub fn read_origin(&self) -> anyhow::Result<Option<String>> {
        self.read_ref_file(&self.origin_path())
    }

    pub fn set_origin(&self, link: &str) -> anyhow::Result<()> {
        write_atomic(&self.origin_path(), link.as_bytes()).context("failed to write ORIGIN")
    }

    fn read_ref_file(&self, path: &Path) -> anyhow::Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(content.to_string()))
        }
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn origin_path(&self) -> Box<Path> {
        self.path.join(ORIGIN_REF_NAME).into_boxed_path()
    }
}
