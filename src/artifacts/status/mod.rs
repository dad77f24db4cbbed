//! Working tree status inspection
//!
//! Compares the staging index against the working directory.
//!
//! ## Components
//!
//! - `file_change`: The four file classifications
//! - `inspector`: Per-file fingerprint comparison
//! - `status_info`: Status report aggregation and display

pub mod file_change;
pub mod inspector;
pub mod status_info;
