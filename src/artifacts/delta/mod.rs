//! Text deltas
//!
//! A delta is an edit script turning one text into another. Commits store
//! deltas in their encoded string form and only parse them when content is
//! reconstructed, so a single malformed delta never prevents the commit log
//! from loading.
//!
//! - `script`: the edit-script model and its text encoding
//! - `line_codec`: line-oriented codec built on Myers' diff (`similar`)

pub mod line_codec;
pub mod script;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use line_codec::LineDeltaCodec;

/// Encoded delta as persisted in a commit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Delta(String);

impl Delta {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Delta {
    fn from(value: String) -> Self {
        Delta(value)
    }
}

impl std::fmt::Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeltaError {
    /// The delta text does not follow the edit-script grammar.
    #[error("malformed delta at byte {offset}: {reason}")]
    Malformed { offset: usize, reason: String },

    /// The delta was computed against a different base text.
    #[error("delta does not apply: expected base {expected}, found {actual}")]
    BaseMismatch { expected: String, actual: String },

    /// An operation reaches past the end of the base or splits a character.
    #[error("delta operation out of bounds: {0}")]
    OutOfBounds(String),
}

/// Computes and applies text deltas
///
/// The core treats the codec as a fallible collaborator: `apply` may fail
/// and callers isolate the failure to the file being processed.
pub trait DeltaCodec {
    /// Edit script turning `old` into `new`; an explicit no-op when equal.
    fn compute(&self, old: &str, new: &str) -> Delta;

    /// Apply `delta` to `base`.
    fn apply(&self, base: &str, delta: &Delta) -> Result<String, DeltaError>;
}
