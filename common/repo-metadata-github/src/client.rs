//! GitHub client implementation
//!
//! [`RepositoryClient`] owns two HTTP handles built once at construction:
//! a plain one used to probe github.com for redirects, and an authenticated
//! one carrying the bearer token for GraphQL requests. Operations live in
//! `repositories.rs` as further `impl` blocks.

use crate::constants::{
    DEFAULT_GRAPHQL_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, DEFAULT_WEB_BASE, TOKEN_ENV_VAR,
};
use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, redirect};
use std::time::Duration;

/// Settings for a [`RepositoryClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub token: String,
    pub web_base: String,
    pub graphql_url: String,
    pub user_agent: String,
    /// Connect and read timeout
    ///
    /// reqwest has no write timeout, so the whole request is additionally
    /// capped at three times this value (connect + write + read). A response
    /// that keeps trickling in past that cap is aborted.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with an optional token
    /// If no token is provided, will try to read from GITHUB_TOKEN environment variable
    pub fn new(token: Option<String>) -> Self {
        let token = token
            .or_else(|| std::env::var(TOKEN_ENV_VAR).ok())
            .unwrap_or_default();

        Self {
            token,
            web_base: DEFAULT_WEB_BASE.to_string(),
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_web_base(mut self, web_base: impl Into<String>) -> Self {
        self.web_base = web_base.into();
        self
    }

    pub fn with_graphql_url(mut self, graphql_url: impl Into<String>) -> Self {
        self.graphql_url = graphql_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Client for fetching repository metadata from GitHub
///
/// ## Example
///
/// ```rust,no_run
/// use repo_metadata_github::RepositoryClient;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = RepositoryClient::new(None)?; // token from GITHUB_TOKEN
/// let data = client.fetch_repository("rust-lang/rust").await?;
/// println!("{:?}", data.stargazers_count());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RepositoryClient {
    pub(crate) config: ClientConfig,
    pub(crate) http_client: Client,
    pub(crate) authenticated_client: Client,
}

impl RepositoryClient {
    /// Create a client against github.com with an optional token
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(token))
    }

    /// Create a client from an explicit configuration
    ///
    /// # Errors
    /// Returns an error if the token or user agent are not valid header values,
    /// or if the HTTP client cannot be initialised.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = base_builder(&config)
            .build()
            .context("Failed to build HTTP client")?;

        let mut auth = HeaderValue::from_str(&format!("bearer {}", config.token))
            .context("GitHub token is not a valid header value")?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let authenticated_client = base_builder(&config)
            .default_headers(headers)
            .build()
            .context("Failed to build authenticated HTTP client")?;

        Ok(Self {
            config,
            http_client,
            authenticated_client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the bearer token sent with GraphQL requests
    pub fn token(&self) -> &str {
        &self.config.token
    }
}

/// Shared settings for both HTTP handles
///
/// Redirects are never followed: the 301/302 answers from github.com are how
/// renamed repositories are detected.
fn base_builder(config: &ClientConfig) -> ClientBuilder {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .connect_timeout(config.timeout)
        .read_timeout(config.timeout)
        // bounds the write phase, which reqwest has no dedicated timeout for
        .timeout(config.timeout * 3)
        .redirect(redirect::Policy::none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_prefers_explicit_token() {
        unsafe { std::env::set_var(TOKEN_ENV_VAR, "from-env") };
        let config = ClientConfig::new(Some("explicit".to_string()));
        unsafe { std::env::remove_var(TOKEN_ENV_VAR) };

        assert_eq!(config.token, "explicit");
    }

    #[test]
    #[serial]
    fn test_config_reads_token_from_env() {
        unsafe { std::env::set_var(TOKEN_ENV_VAR, "from-env") };
        let config = ClientConfig::new(None);
        unsafe { std::env::remove_var(TOKEN_ENV_VAR) };

        assert_eq!(config.token, "from-env");
    }

    #[test]
    #[serial]
    fn test_config_without_token_is_empty() {
        unsafe { std::env::remove_var(TOKEN_ENV_VAR) };
        let config = ClientConfig::default();

        assert_eq!(config.token, "");
        assert_eq!(config.web_base, DEFAULT_WEB_BASE);
        assert_eq!(config.graphql_url, DEFAULT_GRAPHQL_URL);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_config_builders() {
        let config = ClientConfig::new(Some("t".to_string()))
            .with_web_base("http://localhost:1234")
            .with_graphql_url("http://localhost:1234/graphql")
            .with_user_agent("tests")
            .with_timeout(Duration::from_secs(1));

        assert_eq!(config.web_base, "http://localhost:1234");
        assert_eq!(config.graphql_url, "http://localhost:1234/graphql");
        assert_eq!(config.user_agent, "tests");
        assert_eq!(config.timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_client_keeps_token() {
        let client = RepositoryClient::new(Some("secret".to_string())).unwrap();
        assert_eq!(client.token(), "secret");
        assert_eq!(client.config().token, "secret");
    }

    #[test]
    fn test_client_keeps_config() {
        let config = ClientConfig::new(Some("t".to_string()))
            .with_web_base("http://localhost:1234")
            .with_timeout(Duration::from_millis(500));
        let client = RepositoryClient::with_config(config).unwrap();

        assert_eq!(client.config().web_base, "http://localhost:1234");
        assert_eq!(client.config().graphql_url, DEFAULT_GRAPHQL_URL);
        assert_eq!(client.config().timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_client_rejects_token_with_newline() {
        let result = RepositoryClient::new(Some("bad\ntoken".to_string()));
        assert!(result.is_err());
    }
}
