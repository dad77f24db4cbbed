use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::status::file_change::FileStatus;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;

/// Outcome of a status run: four disjoint lists, each sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) modified: Vec<String>,
    pub(crate) missing: Vec<String>,
    pub(crate) untracked: Vec<String>,
    pub(crate) unchanged: Vec<String>,
}

impl StatusInfo {
    pub fn modified(&self) -> &[String] {
        &self.modified
    }

    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn untracked(&self) -> &[String] {
        &self.untracked
    }

    pub fn unchanged(&self) -> &[String] {
        &self.unchanged
    }

    pub fn files(&self, status: FileStatus) -> &[String] {
        match status {
            FileStatus::Modified => &self.modified,
            FileStatus::Missing => &self.missing,
            FileStatus::Untracked => &self.untracked,
            FileStatus::Unchanged => &self.unchanged,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.modified.is_empty()
            && self.missing.is_empty()
            && self.untracked.is_empty()
            && self.unchanged.is_empty()
    }

    fn record(&mut self, status: FileStatus, name: String) {
        match status {
            FileStatus::Modified => self.modified.push(name),
            FileStatus::Missing => self.missing.push(name),
            FileStatus::Untracked => self.untracked.push(name),
            FileStatus::Unchanged => self.unchanged.push(name),
        }
    }

    fn sort(&mut self) {
        self.modified.sort();
        self.missing.sort();
        self.untracked.sort();
        self.unchanged.sort();
    }
}

#[derive(new)]
pub struct Status<'w> {
    workspace: &'w Workspace,
}

impl<'w> Status<'w> {
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let inspector = Inspector::new(self.workspace);
        let mut info = StatusInfo::default();

        for (name, staged) in index.entries() {
            let status = inspector.check_index_against_workspace(name, staged);
            info.record(status, name.clone());
        }

        for name in self.workspace.list_files()? {
            if !index.is_tracked(&name) {
                info.record(FileStatus::Untracked, name);
            }
        }

        info.sort();
        Ok(info)
    }
}
