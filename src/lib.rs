//! codat: a local, single-branch version control system
//!
//! File history is stored as chains of per-file text deltas. Each commit
//! records, for every staged file, the delta from the file's content at the
//! parent commit to its current content; any version is rebuilt by replaying
//! those deltas from the root commit forward.
//!
//! - `areas`: Persisted repository state (index, commit log, refs, ...)
//! - `artifacts`: Data types and algorithms (deltas, reconstruction, status)
//! - `commands`: The command implementations driven by the CLI
//! - `errors`: Error kinds surfaced to the CLI dispatcher

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
