use crate::areas::repository::Repository;
use crate::artifacts::remote::codat_link::CodatLink;
use std::io::Write;

impl Repository {
    pub async fn set_origin(&mut self, link: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;
        let _lock = self.lock_exclusive()?;

        let link = CodatLink::try_parse(link, self.settings().remote_url())?;
        self.refs().set_origin(&link.to_string())?;

        writeln!(self.writer(), "Origin set to {}", link)?;

        Ok(())
    }
}
