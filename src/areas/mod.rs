//! Persisted repository areas
//!
//! - `commits`: Append-only commit log
//! - `index`: Staging index of tracked files and their fingerprints
//! - `lockfile`: Advisory lock serialising access to `.codat`
//! - `refs`: HEAD and ORIGIN pointers
//! - `remote`: HTTP client for the remote content service
//! - `repository`: Owner of all the areas above for one command run
//! - `workspace`: Working directory file system operations

pub(crate) mod commits;
pub(crate) mod index;
pub(crate) mod lockfile;
pub(crate) mod refs;
pub(crate) mod remote;
pub mod repository;
pub(crate) mod workspace;
