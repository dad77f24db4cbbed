//! Remote content service artifacts
//!
//! - `codat_link`: parsing of `<remote>/codat/<id>` links
//! - `credentials`: the user token file
//!
//! Language detection and download file naming live here as well, since
//! both `clone` and `push` only need a couple of lookups.

use std::path::Path;

pub mod codat_link;
pub mod credentials;

pub const CODAT_ID_REGEX: &str = r"^[A-Za-z0-9_\-]+$";
pub const DEFAULT_CLONE_FILENAME: &str = "downloaded_codat.txt";
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

pub const LANGUAGES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    ".go" => "Go",
    ".ts" => "TypeScript",
    ".js" => "JavaScript",
    ".py" => "Python",
    ".java" => "Java",
    ".cpp" => "C++",
    ".c" => "C",
    ".rs" => "Rust",
    ".rb" => "Ruby",
    ".php" => "PHP",
    ".swift" => "Swift",
};

/// Language reported to the remote service for `path`, by file extension
pub fn detect_language(path: &Path) -> &'static str {
    path.extension()
        .and_then(|extension| extension.to_str())
        .and_then(|extension| LANGUAGES.get(format!(".{extension}").as_str()).copied())
        .unwrap_or(UNKNOWN_LANGUAGE)
}

/// File name suggested by a `Content-Disposition` header value
///
/// Only the final path component is kept, so a hostile hint cannot point
/// outside of the clone directory.
pub fn filename_from_disposition(disposition: Option<&str>) -> String {
    disposition
        .and_then(|value| value.split_once("filename="))
        .map(|(_, hint)| hint.split(';').next().unwrap_or_default())
        .map(|hint| hint.trim().trim_matches('"'))
        .and_then(|hint| Path::new(hint).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_CLONE_FILENAME.to_string())
}

/// Directory a cloned file is placed in: its name without the extension
pub fn clone_dir_name(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}
