use crate::areas::remote::RemoteClient;
use crate::areas::repository::Repository;
use crate::artifacts::core::write_atomic;
use crate::artifacts::remote::clone_dir_name;
use crate::artifacts::remote::codat_link::CodatLink;
use anyhow::Context;
use std::io::Write;

impl Repository {
    pub async fn clone_codat(&mut self, link: &str) -> anyhow::Result<()> {
        let link = CodatLink::try_parse(link, self.settings().remote_url())?;

        writeln!(self.writer(), "Cloning codat from: {}", link)?;

        let fetched = RemoteClient::new()?.fetch(&link).await?;

        let dir_name = clone_dir_name(&fetched.filename);
        let dir_path = self.path().join(&dir_name);
        std::fs::create_dir_all(&dir_path)
            .with_context(|| format!("Error creating directory {}", dir_path.display()))?;

        let file_path = dir_path.join(&fetched.filename);
        write_atomic(&file_path, &fetched.content)
            .with_context(|| format!("Error saving file {}", file_path.display()))?;

        writeln!(
            self.writer(),
            "File downloaded successfully as {} inside directory {}!",
            fetched.filename,
            dir_name
        )?;

        Ok(())
    }
}
