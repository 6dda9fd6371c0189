use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::request::{PageRequest, character_url};
use super::types::{CharacterRecord, PeoplePage};
use crate::core::identifier::CharacterId;

/// Errors that can occur while fetching from the API.
///
/// The fetcher only reports them. Whether a failure is shown, retried or
/// swallowed is decided by whoever issued the fetch.
#[derive(Debug)]
pub enum FetchError {
    /// The request URL could not be built.
    InvalidUrl(String),
    /// Network-level failure (DNS, connection refused, body read aborted).
    Network(String),
    /// API answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not JSON or did not have the expected shape.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Source of character data. One call is exactly one round trip.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch one page of the `/people` listing.
    async fn fetch_page(&self, request: &PageRequest) -> Result<PeoplePage, FetchError>;

    /// Fetch a single character by id.
    async fn fetch_one(&self, id: CharacterId) -> Result<CharacterRecord, FetchError>;
}

/// `Fetcher` backed by the SWAPI REST endpoints.
pub struct SwapiClient {
    base_url: String,
    client: reqwest::Client,
}

impl SwapiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        info!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Response status for {}: {}", url, status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("SWAPI error: {} - {}", status.as_u16(), body);
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        // Read the body first so a truncated transfer stays a network error
        // and only a bad payload counts as a parse error.
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[async_trait]
impl Fetcher for SwapiClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PeoplePage, FetchError> {
        let url = request.url(&self.base_url)?;
        let page: PeoplePage = self.get_json(&url).await?;
        info!(
            "Page loaded: {} results, previous={}, next={}",
            page.results.len(),
            page.previous.is_some(),
            page.next.is_some()
        );
        Ok(page)
    }

    async fn fetch_one(&self, id: CharacterId) -> Result<CharacterRecord, FetchError> {
        let url = character_url(&self.base_url, id);
        let record: CharacterRecord = self.get_json(&url).await?;
        info!("Character {} loaded: {}", id, record.name);
        Ok(record)
    }
}
