//! CLI command implementations.

pub mod init;
pub mod parse;
pub mod summary;
