use std::{fs, path::PathBuf};
use tracing::debug;

use super::Fetcher;
use crate::error::{FeedError, Result};

/// Reads a roster snapshot from local disk.
pub struct FileFetcher {
    path: PathBuf,
    locator: String,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let locator = path.display().to_string();
        FileFetcher { path, locator }
    }
}

impl Fetcher for FileFetcher {
    fn fetch(&self) -> Result<Vec<u8>> {
        debug!(path = %self.locator, "reading feed snapshot");
        fs::read(&self.path).map_err(|e| FeedError::transport(&self.locator, e))
    }

    fn locator(&self) -> &str {
        &self.locator
    }
}
