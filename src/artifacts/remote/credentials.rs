//! User credential file
//!
//! A plain text file holding a single `token=<token>` line, shared by every
//! repository of the user.

use crate::artifacts::core::write_atomic;
use crate::errors::CodatError;
use anyhow::Context;
use derive_new::new;
use std::path::Path;

const TOKEN_KEY: &str = "token=";

#[derive(Debug, new)]
pub struct Credentials {
    path: Box<Path>,
}

impl Credentials {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token; fails with `MissingToken` when none is set
    pub fn read_token(&self) -> anyhow::Result<String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Err(CodatError::MissingToken.into());
            }
            Err(error) => {
                return Err(anyhow::Error::new(error)
                    .context(format!("Unable to read token from {}", self.path.display())));
            }
        };

        content
            .lines()
            .find_map(|line| line.trim().strip_prefix(TOKEN_KEY))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .ok_or_else(|| CodatError::MissingToken.into())
    }

    pub fn write_token(&self, token: &str) -> anyhow::Result<()> {
        let token = token.trim();
        if token.is_empty() {
            anyhow::bail!("token cannot be empty");
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create config directory {}", parent.display())
            })?;
        }

        write_atomic(&self.path, format!("{TOKEN_KEY}{token}\n").as_bytes())
    }
}
