//! Default endpoints and settings for GitHub access

use std::time::Duration;

/// Web host used to detect repository redirects
pub const DEFAULT_WEB_BASE: &str = "https://github.com";

/// GraphQL API endpoint
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Environment variable holding the default bearer token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Default User-Agent header for all requests
pub const DEFAULT_USER_AGENT: &str = concat!("repo-metadata/", env!("CARGO_PKG_VERSION"));

/// Connect and read timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);
