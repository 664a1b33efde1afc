//! Repository-related operations

use crate::client::RepositoryClient;
use crate::constants::TOKEN_ENV_VAR;
use crate::error::GitHubError;
use crate::query::render_repository_query;
use crate::types::RepositoryData;
use crate::util::{detect_repo_name, split_path};
use anyhow::{Context, Result, anyhow};
use reqwest::StatusCode;
use reqwest::header::LOCATION;
use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct QueryPayload<'a> {
    query: &'a str,
}

impl RepositoryClient {
    /// Fetch repository metadata from the GraphQL API
    ///
    /// The path is first resolved to its canonical form with
    /// [`resolve_path`](Self::resolve_path), then the repository query is
    /// posted with the configured bearer token.
    ///
    /// # Arguments
    /// * `path` - Repository path in `owner/name` form, possibly stale
    ///
    /// # Errors
    /// Returns an error if:
    /// - The repository cannot be found on github.com ([`GitHubError::UnknownRepo`])
    /// - The API reports errors for the query ([`GitHubError::InvalidResponse`])
    /// - A request fails or the response is not valid JSON
    pub async fn fetch_repository(&self, path: &str) -> Result<RepositoryData> {
        let canonical = self.resolve_path(path).await?;
        let (owner, name) = split_path(&canonical);
        let query = render_repository_query(owner, name);

        if self.config.token.is_empty() {
            log::warn!(
                "No GitHub token configured; set {} to authenticate GraphQL requests",
                TOKEN_ENV_VAR
            );
        }

        log::debug!("POST {} for {}/{}", self.config.graphql_url, owner, name);
        let response = self
            .authenticated_client
            .post(&self.config.graphql_url)
            .json(&QueryPayload { query: &query })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("GraphQL response for {}: {}", canonical, status);

        RepositoryData::from_response_body(&body)
    }

    /// Resolve a possibly renamed repository path to its current `owner/name`
    ///
    /// GitHub's GraphQL API does not follow repository renames, but the web
    /// host answers the old path with a redirect to the new one.
    ///
    /// # Errors
    /// Returns [`GitHubError::UnknownRepo`] for any status other than 200, 301
    /// or 302, and a generic error if a redirect has no usable `Location`.
    pub async fn resolve_path(&self, path: &str) -> Result<String> {
        let url = format!(
            "{}/{}",
            self.config.web_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        log::debug!("HEAD {}", url);
        let response = self.http_client.head(&url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(path.to_string()),
            StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND => {
                let location = response
                    .headers()
                    .get(LOCATION)
                    .ok_or_else(|| anyhow!("Redirect for {} has no Location header", path))?
                    .to_str()
                    .with_context(|| format!("Redirect for {} has an unreadable Location", path))?;

                let canonical = detect_repo_name(location).ok_or_else(|| {
                    anyhow!("Cannot detect repository name in redirect to {}", location)
                })?;

                log::info!("Repository {} has moved to {}", path, canonical);
                Ok(canonical)
            }
            status => {
                log::debug!("HEAD {} returned {}", url, status);
                Err(GitHubError::UnknownRepo {
                    path: path.to_string(),
                    status: status.as_u16(),
                }
                .into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_payload_shape() {
        let payload = QueryPayload { query: "query { viewer { login } }" };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"query": "query { viewer { login } }"}));
    }
}
