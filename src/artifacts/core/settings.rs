use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

pub const REMOTE_URL_ENV: &str = "CODAT_REMOTE_URL";
pub const CONFIG_DIR_ENV: &str = "CODAT_CONFIG_DIR";
pub const LOG_ENV: &str = "CODAT_LOG";

const DEFAULT_REMOTE_URL: &str = "http://localhost:3000";
const DEFAULT_CONFIG_DIR: &str = ".codat";
const CREDENTIALS_FILE: &str = "config";

/// Process-wide settings read from the environment
#[derive(Debug, Clone, new)]
pub struct Settings {
    /// Base URL of the remote content service, without a trailing slash
    remote_url: String,
    /// Directory holding the user credential file
    config_dir: PathBuf,
}

impl Settings {
    /// Reads `CODAT_REMOTE_URL` and `CODAT_CONFIG_DIR`, falling back to
    /// `http://localhost:3000` and `$HOME/.codat`.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let remote_url = std::env::var(REMOTE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REMOTE_URL.to_string());

        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .context("Unable to determine the home directory")?
                .join(DEFAULT_CONFIG_DIR),
        };

        Ok(Settings::new(
            remote_url.trim().trim_end_matches('/').to_string(),
            config_dir,
        ))
    }

    pub fn remote_url(&self) -> &str {
        &self.remote_url
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.config_dir.join(CREDENTIALS_FILE)
    }
}
