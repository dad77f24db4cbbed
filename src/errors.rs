//! Error taxonomy shared by the repository areas and commands
//!
//! Commands return `anyhow::Result` and attach context as they go; the
//! variants below are created at the leaves so that `main` can downcast
//! and pick a process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by repository operations.
#[derive(Debug, Error)]
pub enum CodatError {
    /// A tracked command ran outside of an initialized repository.
    #[error("not a codat repository (or any of the parent directories): {0}")]
    Uninitialized(PathBuf),

    #[error("repository already initialized in {0}")]
    AlreadyInitialized(PathBuf),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unknown commit: {0}")]
    UnknownCommit(String),

    /// A commit prefix matched more than one commit.
    #[error("ambiguous commit prefix {prefix}: {candidates:?}")]
    AmbiguousCommit {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error("nothing to commit: no staged file could be read")]
    NothingToCommit,

    /// Persisted state could not be parsed.
    #[error("corrupt repository state in {path}: {reason}")]
    CorruptState { path: PathBuf, reason: String },

    #[error("invalid codat link: {0}")]
    InvalidLink(String),

    #[error("token is empty. Set the token using: codat set-token <token>")]
    MissingToken,

    #[error("origin is empty. Set the origin using: codat set-origin <codatlink>")]
    MissingOrigin,

    /// The remote content service rejected a request.
    #[error("remote error ({status}): {message}")]
    Remote { status: u16, message: String },
}

impl CodatError {
    /// Process exit code used by the command-line dispatcher.
    pub fn exit_code(&self) -> u8 {
        match self {
            CodatError::Uninitialized(_) => 128,
            _ => 1,
        }
    }
}
