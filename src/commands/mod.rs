//! Command implementations
//!
//! - `porcelain`: Local version control workflow (init, add, commit, ...)
//! - `remote`: Exchange with the remote content service (clone, push, ...)
//!
//! Every command is an `impl Repository` block so that it shares the same
//! persisted areas and output writer.

pub mod porcelain;
pub mod remote;
