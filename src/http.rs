//! Shared HTTP client.
//!
//! Wraps a blocking `reqwest` client with the user agent and timeout
//! every outgoing request uses.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Fetches documents over HTTP/HTTPS.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 30-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("langtable/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The underlying client, for requests that need headers or status codes.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Fetch a URL and decode its JSON body.
    pub fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        response
            .json()
            .with_context(|| format!("Failed to parse JSON from {}", url))
    }

    /// Fetch a text document.
    ///
    /// Returns `None` if the server answers 404 Not Found.
    pub fn fetch_optional(&self, url: &str) -> Result<Option<String>> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Request to {} failed", url))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        Ok(Some(response.text()?))
    }

    /// Fetch a text document that must exist.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        match self.fetch_optional(url)? {
            Some(content) => Ok(content),
            None => bail!("HTTP 404 Not Found fetching {}", url),
        }
    }
}
