//! Records Loader
//!
//! One GET against the records endpoint, mapped into display items.

use crate::config::SourceConfig;
use crate::error::LoadError;
use crate::item::{parse_records, DisplayItem};

/// Header carrying the NocoDB API token
const TOKEN_HEADER: &str = "xc-token";

/// HTTP client bound to one source
#[derive(Debug, Clone)]
pub struct RecordsClient {
    http: reqwest::Client,
    config: SourceConfig,
}

impl RecordsClient {
    pub fn new(config: SourceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch one page of records and map them into display items.
    pub async fn fetch_items(&self) -> Result<Vec<DisplayItem>, LoadError> {
        let url = self.config.records_url();
        log::debug!(
            "[card-source] GET {} offset={} limit={} viewId={}",
            url,
            self.config.offset,
            self.config.page_size,
            self.config.view_id
        );

        let mut request = self.http.get(&url).query(&[
            ("offset", self.config.offset.to_string()),
            ("limit", self.config.page_size.to_string()),
            ("viewId", self.config.view_id.clone()),
        ]);
        if let Some(token) = self.config.token() {
            request = request.header(TOKEN_HEADER, token);
        }

        let response = request.send().await.map_err(|e| {
            log::error!("[card-source] request to {} failed: {}", url, e);
            LoadError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("[card-source] {} responded with {}", url, status);
            return Err(LoadError::from_status(status.as_u16()));
        }

        let body = response.text().await?;
        let items = parse_records(&body).map_err(|e| {
            log::error!("[card-source] could not decode records: {}", e);
            LoadError::from(e)
        })?;

        log::info!("[card-source] loaded {} cards", items.len());
        Ok(items)
    }
}

/// Load cards once from the configured source.
pub async fn load_items(config: &SourceConfig) -> Result<Vec<DisplayItem>, LoadError> {
    RecordsClient::new(config.clone()).fetch_items().await
}
