use crate::areas::commits::CommitLog;
use crate::areas::index::Index;
use crate::areas::lockfile::RepositoryLock;
use crate::areas::refs::Refs;
use crate::areas::workspace::{REPOSITORY_DIR, Workspace};
use crate::artifacts::core::settings::Settings;
use crate::artifacts::remote::credentials::Credentials;
use crate::errors::CodatError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

const INDEX_FILE: &str = "index";
const COMMITS_FILE: &str = "commits";

/// A workspace together with the persisted state in its `.codat` directory
///
/// Persisted areas are loaded once at the start of a command, mutated in
/// memory and written back before the command returns.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    commits: CommitLog,
    workspace: Workspace,
    refs: Refs,
    settings: Settings,
}

impl Repository {
    pub fn new(
        path: &str,
        writer: Box<dyn std::io::Write>,
        settings: Settings,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("Unable to resolve workspace path {}", path))?;
        let repository_dir = path.join(REPOSITORY_DIR);

        let index = Index::new(repository_dir.join(INDEX_FILE).into_boxed_path());
        let commits = CommitLog::new(repository_dir.join(COMMITS_FILE).into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(repository_dir.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            commits,
            workspace,
            refs,
            settings,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository_dir(&self) -> PathBuf {
        self.path.join(REPOSITORY_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.repository_dir().is_dir()
    }

    /// Fail with `Uninitialized` unless `init` has been run here
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(CodatError::Uninitialized(self.path.to_path_buf()).into())
        }
    }

    /// Exclusive lock for commands that rewrite persisted state
    pub fn lock_exclusive(&self) -> anyhow::Result<RepositoryLock> {
        RepositoryLock::exclusive(&self.repository_dir())
    }

    /// Shared lock for read-only commands
    pub fn lock_shared(&self) -> anyhow::Result<RepositoryLock> {
        RepositoryLock::shared(&self.repository_dir())
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn commits(&self) -> &CommitLog {
        &self.commits
    }

    pub fn commits_mut(&mut self) -> &mut CommitLog {
        &mut self.commits
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.settings.credentials_path().into_boxed_path())
    }
}
