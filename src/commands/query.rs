//! Query command implementation

use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use repo_metadata_github::render_repository_query;

/// Query command printing the GraphQL query that `fetch` would send
///
/// No redirect resolution happens here, so the query uses the paths as given.
pub struct QueryCommand;

impl QueryCommand {
    fn render(repo: &str) -> String {
        let (owner, name) = repo.split_once('/').unwrap_or((repo, ""));
        render_repository_query(owner, name)
    }
}

#[async_trait]
impl Command for QueryCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        for repo in &context.repos {
            println!("{}", Self::render(repo));
        }
        Ok(())
    }
}
