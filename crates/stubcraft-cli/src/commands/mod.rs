//! Subcommand handlers.

pub mod completions;
pub mod init;
pub mod make;
