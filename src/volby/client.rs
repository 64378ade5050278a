// src/volby/client.rs
use crate::utils::error::FetchError;
use crate::volby::models::{DistrictUnit, ScrapeConfig};
use reqwest::header;
use scraper::Html;
use std::time::Duration;

const VOLBY_USER_AGENT: &str = concat!("volby_scraper/", env!("CARGO_PKG_VERSION"));

/// Creates a reqwest client configured for volby.cz interaction.
fn build_volby_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(VOLBY_USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Page fetcher shared by every stage of the pipeline.
pub struct VolbyClient {
    http: reqwest::Client,
    request_delay: Duration,
}

impl VolbyClient {
    pub fn new(config: &ScrapeConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http: build_volby_client(config.timeout)?,
            request_delay: config.request_delay,
        })
    }

    /// Downloads a page body. Non-2xx responses are errors.
    pub async fn download_page(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("Downloading page: {}", url);

        let response = self.http.get(url)
            .header(header::ACCEPT, "text/html,*/*")
            .send()
            .await?; // Propagates reqwest::Error as FetchError::Network

        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error status: {} for URL: {}", status, url);
            return Err(FetchError::Http { status, url: url.to_string() });
        }

        let body = response.text().await?;
        tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), url);

        Ok(body)
    }

    /// Fetches and parses a page. Any failure is logged and turned into `None`.
    pub async fn fetch_document(&self, url: &str) -> Option<Html> {
        match self.download_page(url).await {
            Ok(body) => Some(Html::parse_document(&body)),
            Err(e) => {
                tracing::warn!("Unable to process the request for {}: {}", url, e);
                None
            }
        }
    }

    /// One municipality's unit of work: fetch its page, then pause before the next request.
    pub async fn fetch_unit(&self, unit: &DistrictUnit) -> Option<Html> {
        let document = self.fetch_document(&unit.url).await;
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }
        document
    }
}
