//! Staging index
//!
//! The index records which files are declared for the next commit, together
//! with the fingerprint of their content at the moment they were staged.
//! Entries are never consumed by a commit: once staged, a file stays tracked
//! and is re-diffed by every later commit until it is staged again.
//!
//! ## Index File Format
//!
//! A JSON object mapping workspace-relative filenames to fingerprints:
//! ```text
//! { "a.txt": "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d" }
//! ```

use crate::artifacts::core::write_atomic;
use crate::artifacts::objects::fingerprint::Fingerprint;
use std::collections::BTreeMap;
use std::path::Path;

/// Tracked files mapped to their staged fingerprints
pub type IndexEntries = BTreeMap<String, Fingerprint>;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.codat/index`)
    path: Box<Path>,
    entries: IndexEntries,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    /// Load the index from disk
    ///
    /// A missing or malformed index file does not abort the command: the
    /// index degrades to empty and a warning is emitted.
    pub fn rehydrate(&mut self) {
        self.clear();

        let content = match std::fs::read(self.path()) {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(
                    path = %self.path().display(),
                    %error,
                    "index file is unreadable, treating the index as empty"
                );
                return;
            }
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            return;
        }

        match serde_json::from_slice::<IndexEntries>(&content) {
            Ok(entries) => self.entries = entries,
            Err(error) => {
                tracing::warn!(
                    path = %self.path().display(),
                    %error,
                    "index file is malformed, treating the index as empty"
                );
            }
        }
    }

    pub fn entry_by_path(&self, name: &str) -> Option<&Fingerprint> {
        self.entries.get(name)
    }

    pub fn is_tracked(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Stage `name`, replacing any earlier fingerprint
    pub fn add(&mut self, name: String, fingerprint: Fingerprint) {
        self.entries.insert(name, fingerprint);
    }

    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let content = serde_json::to_vec_pretty(&self.entries)?;
        write_atomic(self.path(), &content)?;

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Fingerprint)> {
        self.entries.iter()
    }

    /// Snapshot of the staged filenames, in name order
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
