use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::Fetcher;
use crate::error::{FeedError, Result};

/// Single blocking GET against the feed URL. No retries.
pub struct HttpFetcher {
    client: Client,
    url: Url,
}

impl HttpFetcher {
    /// `timeout: None` waits as long as the transport does.
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::transport(url.as_str(), e))?;
        Ok(HttpFetcher { client, url })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self) -> Result<Vec<u8>> {
        debug!(url = %self.url, "fetching feed");
        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| FeedError::transport(self.url.as_str(), e))?;

        // the connection goes back to the pool (or is closed) once the body is drained
        let body = resp
            .bytes()
            .map_err(|e| FeedError::transport(self.url.as_str(), e))?;
        debug!(url = %self.url, bytes = body.len(), "fetched feed");
        Ok(body.to_vec())
    }

    fn locator(&self) -> &str {
        self.url.as_str()
    }
}
