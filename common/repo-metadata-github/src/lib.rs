//! GitHub repository metadata client
//!
//! This library fetches repository metadata from GitHub's GraphQL API. Before
//! querying, a repository path is resolved against github.com so that renamed
//! or transferred repositories are queried under their current name, which
//! the GraphQL API does not do on its own.
//!
//! ## Modules
//!
//! - [`client`]: Client construction, configuration and HTTP handles
//! - [`repositories`]: Path resolution and repository fetching
//! - [`query`]: Repository query rendering
//! - [`types`]: Response types
//! - [`error`]: Typed errors raised by the client
//! - [`util`]: Repository name detection from URLs

mod client;
mod error;
mod query;
mod repositories;
mod types;
mod util;

pub mod constants;

// Re-export public API
pub use client::{ClientConfig, RepositoryClient};
pub use error::GitHubError;
pub use query::render_repository_query;
pub use types::RepositoryData;
pub use util::detect_repo_name;
