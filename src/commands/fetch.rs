//! Fetch command implementation

use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use repo_metadata_github::{RepositoryClient, RepositoryData};

/// Fetch command printing repository metadata as JSON
pub struct FetchCommand {
    /// Print single-line JSON instead of pretty output
    pub compact: bool,
}

impl FetchCommand {
    fn render(&self, data: &RepositoryData) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(data)?
        } else {
            serde_json::to_string_pretty(data)?
        };
        Ok(json)
    }
}

#[async_trait]
impl Command for FetchCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = RepositoryClient::with_config(context.client_config.clone())?;
        let mut failed = 0;

        // one HEAD and one POST per repository, in order
        for repo in &context.repos {
            match client.fetch_repository(repo).await {
                Ok(data) => println!("{}", self.render(&data)?),
                Err(e) => {
                    failed += 1;
                    eprintln!("{} | {}", repo.cyan().bold(), format!("Error: {:#}", e).red());
                }
            }
        }

        if failed > 0 {
            anyhow::bail!(
                "Failed to fetch {} of {} repositories",
                failed,
                context.repos.len()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use repo_metadata_github::ClientConfig;
    use serde_json::json;

    fn context_for(server_url: &str, repos: &[&str]) -> CommandContext {
        CommandContext {
            client_config: ClientConfig::new(Some("test-token".to_string()))
                .with_web_base(server_url)
                .with_graphql_url(format!("{}/graphql", server_url)),
            repos: repos.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_compact_and_pretty() {
        let data = RepositoryData::new(json!({"data": {"repository": {"nameWithOwner": "a/b"}}}));

        let compact = FetchCommand { compact: true }.render(&data).unwrap();
        assert_eq!(compact, r#"{"data":{"repository":{"nameWithOwner":"a/b"}}}"#);

        let pretty = FetchCommand { compact: false }.render(&data).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(serde_json::from_str::<serde_json::Value>(&pretty).unwrap(), data.into_inner());
    }

    #[tokio::test]
    async fn test_fetch_command_success() {
        let mut server = Server::new_async().await;
        let _head = server
            .mock("HEAD", "/owner/name")
            .with_status(200)
            .create_async()
            .await;
        let post = server
            .mock("POST", "/graphql")
            .with_body(r#"{"data":{"repository":{"nameWithOwner":"owner/name"}}}"#)
            .create_async()
            .await;

        let context = context_for(&server.url(), &["owner/name"]);
        let result = FetchCommand { compact: true }.execute(&context).await;

        assert!(result.is_ok());
        post.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_command_continues_after_failure() {
        let mut server = Server::new_async().await;
        let _missing = server
            .mock("HEAD", "/owner/missing")
            .with_status(404)
            .create_async()
            .await;
        let _found = server
            .mock("HEAD", "/owner/found")
            .with_status(200)
            .create_async()
            .await;
        let post = server
            .mock("POST", "/graphql")
            .with_body(r#"{"data":{"repository":{"nameWithOwner":"owner/found"}}}"#)
            .expect(1)
            .create_async()
            .await;

        let context = context_for(&server.url(), &["owner/missing", "owner/found"]);
        let err = FetchCommand { compact: true }
            .execute(&context)
            .await
            .unwrap_err();

        post.assert_async().await;
        assert_eq!(err.to_string(), "Failed to fetch 1 of 2 repositories");
    }
}
