//! Persisted value types
//!
//! - **Fingerprint**: SHA-1 of a file's bytes, used for change detection
//! - **CommitHash**: identity of a commit (derived from message and creation instant)
//! - **Commit**: immutable record of per-file deltas linked to its parent
//!
//! Both identifiers are 40-character lowercase hex strings.

pub mod commit;
pub mod commit_hash;
pub mod fingerprint;

/// Length of a SHA-1 hash in hexadecimal format
pub const HEX_DIGEST_LENGTH: usize = 40;

/// Validate a 40-character hex digest
pub(crate) fn is_hex_digest(value: &str) -> bool {
    value.len() == HEX_DIGEST_LENGTH && value.chars().all(|c| c.is_ascii_hexdigit())
}
