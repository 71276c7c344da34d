//! HTTP client for the Ergast-compatible statistics API.
//!
//! One GET per call against a fixed base URL. Everything the stores need
//! (`total`, the driver or race list) is unwrapped from the `MRData`
//! envelope here so the core never sees wire types.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::remote::{FetchError, RacingApi};
use super::types::{DriverPage, DriverTableData, Envelope, RacePage, RaceTableData};

pub const DEFAULT_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";

/// Statistics API client backed by `reqwest`.
pub struct ErgastClient {
    base_url: String,
    client: reqwest::Client,
}

impl ErgastClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self::with_timeout(base_url, None)
    }

    /// Builds a client whose requests give up after `timeout`.
    /// `None` keeps reqwest's default (no timeout).
    pub fn with_timeout(base_url: Option<String>, timeout: Option<Duration>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client ({}), falling back to defaults", e);
            reqwest::Client::new()
        });

        Self { base_url, client }
    }

    /// `{base_url}/{segments..}` with every segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::Network(format!("invalid base URL {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Network(format!("base URL {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues `GET {base_url}/{segments..}?limit=..&offset=..` and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        offset: usize,
        limit: usize,
    ) -> Result<T, FetchError> {
        let url = self.endpoint(segments)?;
        info!("GET {} (limit={}, offset={})", url, limit, offset);

        let response = self
            .client
            .get(url.clone())
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("{} responded with {}", url, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!("API error: {} - {}", status, message);
            return Err(FetchError::Api {
                status,
                message: message.trim().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("Malformed body from {}: {}", url, e);
            FetchError::Parse(e.to_string())
        })
    }
}

#[async_trait]
impl RacingApi for ErgastClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn drivers(&self, offset: usize, limit: usize) -> Result<DriverPage, FetchError> {
        let envelope: Envelope<DriverTableData> =
            self.get_json(&["drivers.json"], offset, limit).await?;
        let page = DriverPage::try_from(envelope.data)?;
        debug!("Fetched {} drivers (total={})", page.drivers.len(), page.total);
        Ok(page)
    }

    async fn driver_results(
        &self,
        driver_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<RacePage, FetchError> {
        let envelope: Envelope<RaceTableData> = self
            .get_json(&["drivers", driver_id, "results.json"], offset, limit)
            .await?;
        let page = RacePage::try_from(envelope.data)?;
        debug!(
            "Fetched {} races for {} (total={})",
            page.races.len(),
            driver_id,
            page.total
        );
        Ok(page)
    }
}
