use crate::areas::repository::Repository;
use crate::artifacts::objects::fingerprint::Fingerprint;

impl Repository {
    pub async fn add(&mut self, file_path: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;
        let _lock = self.lock_exclusive()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate();

        // Nothing is written unless the file can be read
        let name = self.workspace().tracked_name(file_path)?;
        let content = self.workspace().read_file(&name)?;
        let fingerprint = Fingerprint::of(&content);

        tracing::debug!(file = %name, fingerprint = %fingerprint, "staging file");

        index.add(name, fingerprint);
        index.write_updates()?;

        Ok(())
    }
}
