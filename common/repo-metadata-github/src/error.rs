//! Errors raised by the repository client
//!
//! Only failures the client itself detects are typed here. Transport and
//! decoding failures keep their original `reqwest`/`serde_json` types inside
//! the returned `anyhow::Error`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GitHubError {
    /// github.com answered the redirect probe with something other than 200/301/302
    #[error("Cannot find repo {path} on github :(")]
    UnknownRepo { path: String, status: u16 },

    /// The GraphQL API reported errors; holds the comma-joined messages
    #[error("{0}")]
    InvalidResponse(String),
}
