// src/fetch/mod.rs

use crate::config::Config;
use crate::error::{FeedError, Result};

pub mod file;
pub mod http;

pub use file::FileFetcher;
pub use http::HttpFetcher;

/// Retrieves the raw feed payload in one attempt.
pub trait Fetcher {
    fn fetch(&self) -> Result<Vec<u8>>;

    /// Where the bytes come from, for logs and errors.
    fn locator(&self) -> &str;
}

/// Pick a fetcher for the configured feed URL's scheme.
pub fn fetcher_for(config: &Config) -> Result<Box<dyn Fetcher>> {
    match config.feed_url.scheme() {
        "http" | "https" => Ok(Box::new(HttpFetcher::new(
            config.feed_url.clone(),
            config.fetch_timeout,
        )?)),
        "file" => {
            let path = config.feed_url.to_file_path().map_err(|_| {
                FeedError::Config(format!("{} is not a usable file path", config.feed_url))
            })?;
            Ok(Box::new(FileFetcher::new(path)))
        }
        other => Err(FeedError::Config(format!(
            "unsupported feed URL scheme {:?} in {}",
            other, config.feed_url
        ))),
    }
}
