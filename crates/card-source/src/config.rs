//! Source Configuration
//!
//! Endpoint, dataset identifiers and credential for the records API.

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://app.nocodb.com";
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Where cards are read from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub table_id: String,
    #[serde(default)]
    pub view_id: String,
    /// Sent as `xc-token` when present
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub offset: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            table_id: String::new(),
            view_id: String::new(),
            token: None,
            page_size: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl SourceConfig {
    pub fn new(table_id: impl Into<String>, view_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            view_id: view_id.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SourceConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Missing("base URL"));
        }
        if self.table_id.trim().is_empty() {
            return Err(ConfigError::Missing("table ID"));
        }
        if self.view_id.trim().is_empty() {
            return Err(ConfigError::Missing("view ID"));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page size must be positive".to_string()));
        }
        Ok(())
    }

    /// `{base}/api/v2/tables/{table}/records`
    pub fn records_url(&self) -> String {
        format!(
            "{}/api/v2/tables/{}/records",
            self.base_url.trim_end_matches('/'),
            self.table_id
        )
    }

    /// Non-empty token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}
