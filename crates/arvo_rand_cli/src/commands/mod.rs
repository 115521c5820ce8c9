//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod perm;
pub mod sample;
pub mod verify;
