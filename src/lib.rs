//! repo-metadata - A CLI tool for fetching GitHub repository metadata

pub mod commands;
pub mod constants;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use repo_metadata_github::{ClientConfig, GitHubError, RepositoryClient, RepositoryData};
