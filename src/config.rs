// src/config.rs

use std::{env, time::Duration};
use url::Url;

use crate::error::{FeedError, Result};

pub const FEED_URL_VAR: &str = "CSV_URL";
pub const BARE_YEAR_VAR: &str = "ROSTER_ACCEPT_BARE_YEAR";
pub const FETCH_TIMEOUT_VAR: &str = "ROSTER_FETCH_TIMEOUT_SECS";

/// Everything a pipeline run needs to know, resolved once up front.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the roster CSV lives. `http(s)://` or `file://`.
    pub feed_url: Url,
    /// Also accept a bare `YYYY` join date (read as January 1st).
    pub accept_bare_year: bool,
    /// `None` means the fetch waits as long as the transport does.
    pub fetch_timeout: Option<Duration>,
}

impl Config {
    pub fn new(feed_url: Url) -> Self {
        Config {
            feed_url,
            accept_bare_year: false,
            fetch_timeout: None,
        }
    }

    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Resolve from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup(FEED_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                FeedError::Config(format!("{} environment variable is not set", FEED_URL_VAR))
            })?;
        let feed_url = Url::parse(&raw_url)
            .map_err(|e| FeedError::Config(format!("{} is not a valid URL: {}", FEED_URL_VAR, e)))?;

        let accept_bare_year = match lookup(BARE_YEAR_VAR) {
            None => false,
            Some(v) => parse_flag(&v).ok_or_else(|| {
                FeedError::Config(format!("{} must be true/false, got {:?}", BARE_YEAR_VAR, v))
            })?,
        };

        let fetch_timeout = match lookup(FETCH_TIMEOUT_VAR) {
            None => None,
            Some(v) => {
                let secs: u64 = v.trim().parse().map_err(|_| {
                    FeedError::Config(format!(
                        "{} must be a whole number of seconds, got {:?}",
                        FETCH_TIMEOUT_VAR, v
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
        };

        Ok(Config {
            feed_url,
            accept_bare_year,
            fetch_timeout,
        })
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}
