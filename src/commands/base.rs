//! Base types and traits for the command pattern

use anyhow::Result;
use repo_metadata_github::ClientConfig;

/// Context passed to all commands containing shared configuration and options
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Settings for the GitHub client
    pub client_config: ClientConfig,
    /// Repository paths in `owner/name` form to operate on
    pub repos: Vec<String>,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
