use crate::areas::remote::RemoteClient;
use crate::areas::repository::Repository;
use crate::artifacts::remote::codat_link::CodatLink;
use crate::artifacts::remote::detect_language;
use crate::errors::CodatError;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub async fn push(&mut self, file_path: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let token = self.credentials().read_token()?;
        let origin = {
            let _lock = self.lock_shared()?;
            self.refs().read_origin()?.ok_or(CodatError::MissingOrigin)?
        };
        let link = CodatLink::try_parse(&origin, self.settings().remote_url())?;

        let name = self.workspace().tracked_name(file_path)?;
        let code = self.workspace().read_text(&name)?;
        let language = detect_language(Path::new(&name));

        writeln!(self.writer(), "Pushing file: {}", name)?;
        writeln!(self.writer(), "Detected language: {}", language)?;
        writeln!(self.writer(), "Pushing to: {}", link)?;

        RemoteClient::new()?
            .submit(&link, &code, language, &token)
            .await?;

        writeln!(self.writer(), "File pushed successfully!")?;

        Ok(())
    }
}
