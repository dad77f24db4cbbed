#![allow(dead_code)]

pub mod file;

use std::path::Path;

pub fn read_repository_file(dir: &Path, name: &str) -> String {
    let path = dir.join(".codat").join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

pub fn read_index(dir: &Path) -> serde_json::Value {
    serde_json::from_str(&read_repository_file(dir, "index")).expect("index is not valid JSON")
}

pub fn read_commits(dir: &Path) -> Vec<serde_json::Value> {
    serde_json::from_str(&read_repository_file(dir, "commits"))
        .expect("commit log is not a JSON array")
}

pub fn read_head(dir: &Path) -> String {
    read_repository_file(dir, "HEAD").trim().to_string()
}
