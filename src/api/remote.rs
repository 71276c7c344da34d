use std::fmt;

use async_trait::async_trait;

use super::types::{DriverPage, RacePage};

/// Errors that can occur while fetching from the statistics API.
///
/// The stores collapse every variant into a single failed state and only keep
/// the display message; the variants exist so logs say what actually broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-2xx response.
    Api { status: u16, message: String },
    /// Body was not the JSON shape we expect.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } if message.is_empty() => {
                write!(f, "request failed with status code {status}")
            }
            FetchError::Api { status, message } => {
                write!(f, "request failed with status code {status}: {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Read-only access to the racing statistics API.
///
/// Every call is a single attempt: no retries, no caching.
#[async_trait]
pub trait RacingApi: Send + Sync {
    /// Base URL requests are issued against, for logs and the title bar.
    fn base_url(&self) -> &str;

    /// `GET /drivers.json?limit={limit}&offset={offset}`
    async fn drivers(&self, offset: usize, limit: usize) -> Result<DriverPage, FetchError>;

    /// `GET /drivers/{driver_id}/results.json?limit={limit}&offset={offset}`
    async fn driver_results(
        &self,
        driver_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<RacePage, FetchError>;
}
