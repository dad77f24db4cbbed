//! Remote commands
//!
//! - `clone`: Download a codat into a new directory
//! - `set_origin`: Remember the codat a repository pushes to
//! - `set_token`: Store the user token used to authenticate pushes
//! - `push`: Upload a file to the origin codat

pub mod clone;
pub mod push;
pub mod set_origin;
pub mod set_token;
