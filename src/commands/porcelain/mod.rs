//! Porcelain commands (user-facing version control operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage a file for the next commit
//! - `commit`: Record deltas for every staged file
//! - `status`: Classify staged and untracked files
//! - `log`: Show the commit chain from HEAD
//! - `show`: Print a file as of a given commit

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod show;
pub mod status;
