//! Commit record
//!
//! A commit is an immutable record of per-file deltas, each computed against
//! the file's reconstructed content at the parent commit. History is a single
//! linked chain through `ParentHash`; the root has an empty parent.
//!
//! ## Format
//!
//! Inside the `commits` JSON array:
//! ```text
//! {
//!   "Hash": "<40 hex>",
//!   "Message": "<message>",
//!   "Timestamp": "<RFC 3339>",
//!   "Deltas": { "<filename>": "<delta>" },
//!   "ParentHash": "<40 hex or empty>"
//! }
//! ```

use crate::artifacts::delta::Delta;
use crate::artifacts::objects::commit_hash::CommitHash;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Deltas of a commit keyed by filename
pub type DeltaSet = BTreeMap<String, Delta>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Commit {
    hash: CommitHash,
    message: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    deltas: DeltaSet,
    #[serde(with = "parent_hash")]
    parent_hash: Option<CommitHash>,
}

impl Commit {
    /// Create a commit stamped with the current instant
    pub fn new(message: String, deltas: DeltaSet, parent_hash: Option<CommitHash>) -> Self {
        let timestamp = chrono::Utc::now();
        let hash = CommitHash::derive(&message, &timestamp, fake::rand::random::<u32>());

        Commit {
            hash,
            message,
            timestamp,
            deltas,
            parent_hash,
        }
    }

    /// Rebuild a commit from already known parts
    pub fn from_parts(
        hash: CommitHash,
        message: String,
        timestamp: chrono::DateTime<chrono::Utc>,
        deltas: DeltaSet,
        parent_hash: Option<CommitHash>,
    ) -> Self {
        Commit {
            hash,
            message,
            timestamp,
            deltas,
            parent_hash,
        }
    }

    pub fn hash(&self) -> &CommitHash {
        &self.hash
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn delta_for(&self, filename: &str) -> Option<&Delta> {
        self.deltas.get(filename)
    }

    /// Parent commit, `None` for the root
    pub fn parent(&self) -> Option<&CommitHash> {
        self.parent_hash.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent_hash.is_none()
    }

    /// Human-readable timestamp, e.g. "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }
}

/// `ParentHash` is persisted as an empty string for the root commit.
mod parent_hash {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<CommitHash>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(hash) => serializer.serialize_str(hash.as_ref()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<CommitHash>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }

        CommitHash::try_parse(raw)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
