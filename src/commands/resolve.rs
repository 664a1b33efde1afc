//! Resolve command implementation

use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use repo_metadata_github::RepositoryClient;

/// Resolve command printing the current path of each repository
pub struct ResolveCommand;

#[async_trait]
impl Command for ResolveCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = RepositoryClient::with_config(context.client_config.clone())?;
        let mut failed = 0;

        for repo in &context.repos {
            match client.resolve_path(repo).await {
                Ok(canonical) if canonical == *repo => println!("{}", canonical),
                Ok(canonical) => println!("{} -> {}", repo, canonical.green()),
                Err(e) => {
                    failed += 1;
                    eprintln!("{} | {}", repo.cyan().bold(), format!("Error: {:#}", e).red());
                }
            }
        }

        if failed > 0 {
            anyhow::bail!(
                "Failed to resolve {} of {} repositories",
                failed,
                context.repos.len()
            );
        }

        Ok(())
    }
}
