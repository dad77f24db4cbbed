//! Content fingerprint
//!
//! A fingerprint is the SHA-1 digest of a file's raw bytes, rendered as
//! 40 lowercase hex characters. It is the change-detection identity used by
//! the staging index and by `status`; commits are never identified by it.

use crate::artifacts::objects::is_hex_digest;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint of the given bytes
    pub fn of(content: impl AsRef<[u8]>) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content.as_ref());

        Fingerprint(format!("{:x}", hasher.finalize()))
    }

    /// Parse and validate a persisted fingerprint
    pub fn try_parse(value: String) -> anyhow::Result<Self> {
        if !is_hex_digest(&value) {
            anyhow::bail!("Invalid fingerprint: {:?}", value);
        }

        Ok(Fingerprint(value.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Fingerprint::try_parse(value)
    }
}

impl From<Fingerprint> for String {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.0
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
