//! Command argument validation utilities
//!
//! This module provides centralized validation logic for command arguments
//! after clap parsing. It handles domain-specific validation rules that
//! go beyond basic argument parsing.

use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
    /// Empty collection when at least one item is required
    EmptyCollection { argument: String },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
            CommandValidationError::EmptyCollection { argument } => {
                write!(f, "{} cannot be empty", argument)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

fn invalid_repository(repo: &str, reason: &str) -> anyhow::Error {
    validation_error_to_anyhow(CommandValidationError::InvalidValue {
        argument: "repository".to_string(),
        value: repo.to_string(),
        reason: reason.to_string(),
    })
}

/// Validate repository paths
///
/// Ensures at least one path is given and each is of the form `owner/name`
pub fn validate_repository_paths(repos: &[String]) -> Result<()> {
    if repos.is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::EmptyCollection {
                argument: "repositories".to_string(),
            },
        ));
    }

    for repo in repos {
        if repo.chars().any(char::is_whitespace) {
            return Err(invalid_repository(repo, "repository path cannot contain whitespace"));
        }

        match repo.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {}
            _ => return Err(invalid_repository(repo, "expected the form owner/name")),
        }
    }
    Ok(())
}

/// Validate a base URL argument
///
/// Ensures the URL uses http or https
pub fn validate_base_url(argument: &str, url: &str) -> Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: argument.to_string(),
                value: url.to_string(),
                reason: "URL must start with http:// or https://".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate token argument
///
/// Ensures an explicitly given token is not empty
pub fn validate_token(token: &Option<String>) -> Result<()> {
    if let Some(token) = token
        && token.trim().is_empty()
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--token".to_string(),
                value: token.clone(),
                reason: "token cannot be empty or whitespace only".to_string(),
            },
        ));
    }
    Ok(())
}
