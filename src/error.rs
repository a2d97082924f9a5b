use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    /// The feed could not be retrieved: network failure, non-success
    /// status, or an unreadable local snapshot.
    #[error("failed to fetch feed from {locator}: {source}")]
    Transport {
        locator: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The payload could not be decoded as comma-delimited rows.
    #[error("malformed table: {reason}")]
    MalformedTable { reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl FeedError {
    pub fn transport(
        locator: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        FeedError::Transport {
            locator: locator.into(),
            source: source.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        FeedError::MalformedTable {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
