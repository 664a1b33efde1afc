//! GraphQL response types

use crate::error::GitHubError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The part of a GraphQL response the client inspects before handing it over
///
/// Entries of `errors` are kept loose: any entry counts as an error, and only
/// its `message` is read.
#[derive(Deserialize, Debug)]
pub(crate) struct ResponseErrors {
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

/// Text of one GraphQL error entry
///
/// A string `message` is used as is, a missing or null one is empty, and any
/// other value is rendered as JSON.
fn error_message(entry: &Value) -> String {
    match entry.get("message") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
    }
}

/// A successful repository query response
///
/// Wraps the full parsed body unchanged. The accessors below read the
/// commonly used fields of `data.repository` and return `None` when the
/// field is absent or has an unexpected type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RepositoryData {
    body: Value,
}

impl RepositoryData {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Decode a GraphQL response body
    ///
    /// # Errors
    /// Returns [`GitHubError::InvalidResponse`] if the body carries a non-empty
    /// `errors` array, or the `serde_json` error if it is not valid JSON or
    /// `errors` is present but not an array.
    pub fn from_response_body(body: &str) -> Result<Self> {
        let body: Value = serde_json::from_str(body)?;
        let envelope = ResponseErrors::deserialize(&body)?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let message = errors
                .iter()
                .map(error_message)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(GitHubError::InvalidResponse(message).into());
        }

        Ok(Self::new(body))
    }

    pub fn as_json(&self) -> &Value {
        &self.body
    }

    pub fn into_inner(self) -> Value {
        self.body
    }

    /// `data.repository`, when present and not null
    pub fn repository(&self) -> Option<&Value> {
        self.body
            .pointer("/data/repository")
            .filter(|repo| !repo.is_null())
    }

    pub fn name_with_owner(&self) -> Option<&str> {
        self.repository()?.get("nameWithOwner")?.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.repository()?.get("description")?.as_str()
    }

    pub fn stargazers_count(&self) -> Option<u64> {
        self.repository()?.pointer("/stargazers/totalCount")?.as_u64()
    }

    pub fn is_archived(&self) -> Option<bool> {
        self.repository()?.get("isArchived")?.as_bool()
    }
}

impl From<RepositoryData> for Value {
    fn from(data: RepositoryData) -> Self {
        data.into_inner()
    }
}
