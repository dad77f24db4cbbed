//! Commit identifier
//!
//! Commit hashes are 40-character hexadecimal SHA-1 digests computed over the
//! commit message, its creation instant and a random nonce. They are NOT
//! content addresses: two commits with identical deltas get different hashes.
//!
//! ## Format
//!
//! - Full: 40 hex characters
//! - Short: First 7 characters

use crate::artifacts::objects::is_hex_digest;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// Minimum length accepted when resolving an abbreviated hash
pub const MIN_PREFIX_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitHash(String);

impl CommitHash {
    /// Parse and validate a full commit hash
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if !is_hex_digest(&id) {
            anyhow::bail!("Invalid commit hash: {:?}", id);
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Derive the identity of a new commit
    ///
    /// The nonce separates two commits created with the same message within
    /// the resolution of the clock.
    pub fn derive(
        message: &str,
        timestamp: &chrono::DateTime<chrono::Utc>,
        nonce: u32,
    ) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(message.as_bytes());
        hasher.update([0u8]);
        hasher.update(
            timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Nanos, true)
                .as_bytes(),
        );
        hasher.update([0u8]);
        hasher.update(nonce.to_be_bytes());

        Self(format!("{:x}", hasher.finalize()))
    }

    /// Abbreviated form used in command output
    pub fn to_short_hash(&self) -> &str {
        self.0.split_at(7).0
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(&prefix.to_ascii_lowercase())
    }
}

impl TryFrom<String> for CommitHash {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CommitHash::try_parse(value)
    }
}

impl From<CommitHash> for String {
    fn from(hash: CommitHash) -> Self {
        hash.0
    }
}

impl AsRef<str> for CommitHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
