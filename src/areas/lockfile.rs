//! Advisory repository lock
//!
//! Commands that rewrite persisted state hold an exclusive lock on
//! `.codat/LOCK` for their whole duration; read-only commands hold a shared
//! one. The lock is released when the guard is dropped.

use anyhow::Context;
use file_guard::{FileGuard, Lock};
use std::fs::File;
use std::path::Path;

pub const LOCK_FILE_NAME: &str = "LOCK";

pub struct RepositoryLock {
    _guard: FileGuard<Box<File>>,
}

impl RepositoryLock {
    /// Block until the lock can be taken
    pub fn acquire(repository_dir: &Path, kind: Lock) -> anyhow::Result<Self> {
        let lock_path = repository_dir.join(LOCK_FILE_NAME);

        let lock_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("failed to open lock file at {:?}", lock_path))?;

        let exclusive = matches!(kind, Lock::Exclusive);
        let guard = file_guard::lock(Box::new(lock_file), kind, 0, 1)
            .with_context(|| format!("failed to lock {:?}", lock_path))?;

        tracing::debug!(
            path = %lock_path.display(),
            exclusive,
            "acquired repository lock"
        );

        Ok(RepositoryLock { _guard: guard })
    }

    pub fn exclusive(repository_dir: &Path) -> anyhow::Result<Self> {
        Self::acquire(repository_dir, Lock::Exclusive)
    }

    pub fn shared(repository_dir: &Path) -> anyhow::Result<Self> {
        Self::acquire(repository_dir, Lock::Shared)
    }
}
