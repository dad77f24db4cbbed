use colored::Colorize;

const LABEL_WIDTH: usize = 8;

/// Classification of a single file by `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileStatus {
    /// Staged, but the working copy no longer matches the staged fingerprint
    Modified,
    /// Staged, but the working copy cannot be read
    Missing,
    /// Present in the working directory, never staged
    Untracked,
    /// Staged and identical to the working copy
    Unchanged,
}

impl FileStatus {
    pub fn heading(&self) -> &'static str {
        match self {
            FileStatus::Modified => "Modified files:",
            FileStatus::Missing => "Missing files:",
            FileStatus::Untracked => "Untracked files:",
            FileStatus::Unchanged => "Unchanged files:",
        }
    }
}

impl From<&FileStatus> for &str {
    fn from(status: &FileStatus) -> Self {
        match status {
            FileStatus::Modified => "modified:   ",
            FileStatus::Missing => "missing:    ",
            FileStatus::Untracked => "",
            FileStatus::Unchanged => "unchanged:  ",
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_str = match self {
            FileStatus::Modified | FileStatus::Missing => label.red(),
            FileStatus::Untracked => label.normal(),
            FileStatus::Unchanged => label.green(),
        };
        write!(f, "{:>width$}{}", "", colored_str, width = LABEL_WIDTH)
    }
}
