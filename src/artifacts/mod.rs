//! Data structures and algorithms
//!
//! - `core`: Shared utilities (atomic writes, settings)
//! - `delta`: Line-based delta codec
//! - `objects`: Fingerprints, commit hashes and commit records
//! - `reconstruct`: Rebuilding file content from delta chains
//! - `remote`: Codat links, language detection, credentials
//! - `status`: Working tree status inspection

pub mod core;
pub mod delta;
pub mod objects;
pub mod reconstruct;
pub mod remote;
pub mod status;
