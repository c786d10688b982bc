//! Shared helpers used by every binary and service crate in the workspace.

pub mod types;
pub mod utils;
