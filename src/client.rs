use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::constants::{ACCEPT_GEO_JSON, USER_AGENT};

/// HTTP client for the National Weather Service API
#[derive(Clone)]
pub struct NwsClient {
    client: Arc<Client>,
    base_url: Arc<str>,
}

impl NwsClient {
    /// Creates a client that sends the provider headers and gives up after `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GEO_JSON));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client: Arc::new(client),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        })
    }

    /// URL of the active alerts for a region. The code is inserted as given.
    pub fn alerts_url(&self, state: &str) -> String {
        format!("{}/alerts/active/area/{}", self.base_url, state)
    }

    /// Fetches `url` once and deserializes the body.
    ///
    /// Every failure (transport error, timeout, non-success status, body that
    /// does not parse as `T`) collapses into `None`. The cause is only logged.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        match self.make_request(url).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(url, "Provider request failed: {:#}", e);
                None
            }
        }
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await.context("request failed")?;

        if !response.status().is_success() {
            anyhow::bail!("Request failed with status: {}", response.status());
        }

        let data = response
            .json::<T>()
            .await
            .context("malformed response body")?;
        Ok(data)
    }
}
