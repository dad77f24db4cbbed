use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub async fn set_token(&mut self, token: &str) -> anyhow::Result<()> {
        let credentials = self.credentials();
        credentials.write_token(token)?;

        writeln!(
            self.writer(),
            "Token set successfully in {}",
            credentials.path().display()
        )?;

        Ok(())
    }
}
