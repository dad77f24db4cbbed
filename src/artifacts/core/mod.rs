//! Core utilities and shared types
//!
//! - `settings`: environment-driven configuration
//! - atomic file replacement used by every persisted repository artifact

pub mod settings;

use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Replace the file at `path` with `content`
///
/// The content is written to a temporary file next to the target and then
/// renamed over it, so readers only ever observe the old or the new file.
pub fn write_atomic(path: &Path, content: &[u8]) -> anyhow::Result<()> {
    let dir = path
        .parent()
        .context(format!("Invalid artifact path {}", path.display()))?;
    let temp_path = dir.join(generate_temp_name());

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .context(format!("Unable to open temp file {}", temp_path.display()))?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .context(format!("Unable to write temp file {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path).context(format!(
        "Unable to rename temp file to {}",
        path.display()
    ))?;

    Ok(())
}

fn generate_temp_name() -> String {
    format!("tmp-{}", fake::rand::random::<u32>())
}
