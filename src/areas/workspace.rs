use crate::errors::CodatError;
use anyhow::Context;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Name of the repository directory inside the workspace
pub const REPOSITORY_DIR: &str = ".codat";

const IGNORED_PATHS: [&str; 3] = [REPOSITORY_DIR, ".", ".."];

/// Working directory access
///
/// Files are addressed by workspace-relative names using `/` separators,
/// the same keys the index and commit deltas use.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every regular file in the workspace, in name order
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry.path()))
        {
            let entry = entry.with_context(|| {
                format!("Unable to list workspace {}", self.path.display())
            })?;

            if !entry.file_type().is_dir()
                && let Some(name) = self.relative_name(entry.path())
            {
                files.push(name);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Resolve a user-supplied path to the name it is tracked under
    ///
    /// Fails with `FileNotFound` unless the path is an existing regular file
    /// inside the workspace. A symlink is tracked under its own name.
    pub fn tracked_name(&self, file_path: &str) -> anyhow::Result<String> {
        let name = self.normalize_name(file_path)?;

        if !self.file_path(&name).is_file() {
            return Err(CodatError::FileNotFound(file_path.to_string()).into());
        }

        Ok(name)
    }

    /// Workspace-relative name of a path, without touching the file itself
    ///
    /// `.` and `..` are resolved lexically and the final component is kept
    /// as given, so the name matches what `list_files` reports.
    pub fn normalize_name(&self, file_path: &str) -> anyhow::Result<String> {
        let path = Path::new(file_path);
        let relative = if path.is_absolute() {
            self.strip_workspace(path)?
        } else {
            path.to_path_buf()
        };

        let mut parts: Vec<String> = Vec::new();
        for component in relative.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(name) => parts.push(name.to_string_lossy().into_owned()),
                Component::ParentDir => {
                    if parts.pop().is_none() {
                        anyhow::bail!("{} is outside of the workspace", file_path);
                    }
                }
                Component::RootDir | Component::Prefix(_) => {
                    anyhow::bail!("{} is outside of the workspace", file_path);
                }
            }
        }

        if parts.is_empty() {
            anyhow::bail!("{} does not name a file", file_path);
        }

        if parts
            .iter()
            .any(|part| IGNORED_PATHS.contains(&part.as_str()))
        {
            anyhow::bail!("{} is inside the repository directory", file_path);
        }

        Ok(parts.join("/"))
    }

    pub fn read_file(&self, name: &str) -> anyhow::Result<Vec<u8>> {
        let file_path = self.file_path(name);

        std::fs::read(&file_path).map_err(|error| match error.kind() {
            std::io::ErrorKind::NotFound => CodatError::FileNotFound(name.to_string()).into(),
            _ => anyhow::Error::new(error).context(format!("Unable to read {}", name)),
        })
    }

    /// Read a file that must hold UTF-8 text
    pub fn read_text(&self, name: &str) -> anyhow::Result<String> {
        let content = self.read_file(name)?;

        String::from_utf8(content).with_context(|| format!("{} is not valid UTF-8 text", name))
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        name.split('/')
            .fold(self.path.to_path_buf(), |path, part| path.join(part))
    }

    /// Relative part of an absolute path, resolving only its parent directory
    fn strip_workspace(&self, path: &Path) -> anyhow::Result<PathBuf> {
        if let Ok(relative) = path.strip_prefix(self.path.as_ref()) {
            return Ok(relative.to_path_buf());
        }

        let outside = || format!("{} is outside of the workspace", path.display());
        let (Some(parent), Some(file_name)) = (path.parent(), path.file_name()) else {
            anyhow::bail!(outside());
        };

        let parent = parent
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", parent.display()))?;

        let resolved = parent.join(file_name);
        resolved
            .strip_prefix(self.path.as_ref())
            .map(Path::to_path_buf)
            .with_context(outside)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(self.path.as_ref()).unwrap_or(path);

        relative.components().any(|component| {
            if let Component::Normal(name) = component {
                IGNORED_PATHS.contains(&name.to_string_lossy().as_ref())
            } else {
                false
            }
        })
    }

    fn relative_name(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;

        let parts = relative
            .components()
            .map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    }
}
