//! Loader Errors
//!
//! The `Display` text of each variant is what the carousel shows to the user.

use thiserror::Error;

/// Classified failure of a card load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The table or view does not exist (HTTP 404)
    #[error("Unable to connect to the database. Please verify the table ID and view ID.")]
    NotFound,
    /// The token was rejected (HTTP 401/403)
    #[error("Authentication failed. Please verify your API token.")]
    Unauthorized,
    /// Anything else; carries the underlying failure text
    #[error("Failed to load cards: {0}")]
    Other(String),
}

impl LoadError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => LoadError::NotFound,
            401 | 403 => LoadError::Unauthorized,
            code => LoadError::Other(format!("request failed with status code {}", code)),
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::from_status(status.as_u16()),
            None => LoadError::Other(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Other(format!("invalid response body: {}", err))
    }
}

/// Invalid or missing source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Card source is not configured: missing {0}")]
    Missing(&'static str),
    #[error("Card source configuration is invalid: {0}")]
    Invalid(String),
}
