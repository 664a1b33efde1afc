//! Command implementations

pub mod base;
pub mod fetch;
pub mod query;
pub mod resolve;
pub mod validators;

pub use base::{Command, CommandContext};
pub use fetch::FetchCommand;
pub use query::QueryCommand;
pub use resolve::ResolveCommand;
