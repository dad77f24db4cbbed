use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::FileStatus;
use crate::artifacts::status::status_info::{Status, StatusInfo};
use std::io::Write;

const SECTIONS: [FileStatus; 4] = [
    FileStatus::Modified,
    FileStatus::Missing,
    FileStatus::Untracked,
    FileStatus::Unchanged,
];

impl Repository {
    pub async fn status(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;
        let _lock = self.lock_shared()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate();

        let info = Status::new(self.workspace()).initialize(&index)?;
        self.print_status(&info)?;

        Ok(())
    }

    fn print_status(&self, info: &StatusInfo) -> anyhow::Result<()> {
        if info.is_empty() {
            writeln!(self.writer(), "nothing to report, working tree is empty")?;
            return Ok(());
        }

        let mut first = true;
        for status in SECTIONS {
            let files = info.files(status);
            if files.is_empty() {
                continue;
            }

            if !first {
                writeln!(self.writer())?;
            }
            first = false;

            writeln!(self.writer(), "{}", status.heading())?;
            for file in files {
                writeln!(self.writer(), "{}{}", status, file)?;
            }
        }

        Ok(())
    }
}
