use crate::areas::workspace::Workspace;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::status::file_change::FileStatus;
use derive_new::new;

#[derive(new)]
pub struct Inspector<'w> {
    workspace: &'w Workspace,
}

impl<'w> Inspector<'w> {
    /// Compare the working copy of a staged file against its staged fingerprint
    ///
    /// Any read failure classifies the file as missing.
    pub fn check_index_against_workspace(&self, name: &str, staged: &Fingerprint) -> FileStatus {
        match self.workspace.read_file(name) {
            Ok(content) if Fingerprint::of(&content) == *staged => FileStatus::Unchanged,
            Ok(_) => FileStatus::Modified,
            Err(error) => {
                tracing::debug!(file = name, error = %error, "staged file is unreadable");
                FileStatus::Missing
            }
        }
    }
}
