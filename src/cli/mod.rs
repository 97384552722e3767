//! CLI command implementations

pub mod fetch;
pub mod github;
pub mod init;
pub mod profile;
pub mod rings;
