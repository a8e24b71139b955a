//! Catalog data source
//!
//! The data source is a trait so the loader can be pointed at a test double.
//! [`HttpBeerSource`] is the production implementation: one plain GET, no
//! headers, no query, no retries.

use std::time::Duration;

use reqwest::header::RANGE;
use reqwest::StatusCode;

use beercat_core::prelude::*;
use beercat_core::BeerRecord;

use crate::config::SourceSettings;

/// Where beer records come from
#[trait_variant::make(BeerSource: Send)]
pub trait LocalBeerSource {
    /// Fetch the complete beer list
    async fn fetch_beers(&self) -> Result<Vec<BeerRecord>>;

    /// Check whether an image URL can be loaded
    async fn image_available(&self, url: &str) -> bool;
}

/// Fetches the catalog over HTTP with reqwest
#[derive(Debug, Clone)]
pub struct HttpBeerSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBeerSource {
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| Error::network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl BeerSource for HttpBeerSource {
    async fn fetch_beers(&self) -> Result<Vec<BeerRecord>> {
        debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        parse_beer_list(&body)
    }

    async fn image_available(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) if head_unsupported(response.status()) => {
                self.image_available_by_get(url).await
            }
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Image check failed for {}: {}", url, e);
                false
            }
        }
    }
}

impl HttpBeerSource {
    /// Ranged GET for hosts that refuse HEAD
    async fn image_available_by_get(&self, url: &str) -> bool {
        let request = self.client.get(url).header(RANGE, "bytes=0-0");
        match request.send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Image GET failed for {}: {}", url, e);
                false
            }
        }
    }
}

fn head_unsupported(status: StatusCode) -> bool {
    status == StatusCode::METHOD_NOT_ALLOWED || status == StatusCode::NOT_IMPLEMENTED
}

/// Parse a response body as a JSON array of beer records
pub fn parse_beer_list(body: &[u8]) -> Result<Vec<BeerRecord>> {
    serde_json::from_slice(body).map_err(|e| Error::malformed_body(e.to_string()))
}
