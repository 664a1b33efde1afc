//! Central constants for the repo-metadata application

/// Default values for GitHub access
pub mod github {
    pub use repo_metadata_github::constants::{
        DEFAULT_GRAPHQL_URL, DEFAULT_USER_AGENT, DEFAULT_WEB_BASE, TOKEN_ENV_VAR,
    };
}

/// Default values for logging
pub mod logging {
    /// Log level used when neither RUST_LOG nor --verbose is given
    pub const DEFAULT_LEVEL: &str = "warn";

    /// Log level for a single --verbose
    pub const VERBOSE_LEVEL: &str = "info";

    /// Log level for two or more --verbose flags
    pub const DEBUG_LEVEL: &str = "debug";
}
