use reqwest::StatusCode;
use thiserror::Error;

/// Failure while fetching a subreddit listing. Any of these aborts the whole batch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request for r/{sub} failed: {source}")]
    Transport {
        sub: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("r/{sub} returned status {status}")]
    Status { sub: String, status: StatusCode },
    #[error("failed to decode listing for r/{sub}: {source}")]
    Decode {
        sub: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The subreddit whose fetch failed, if the failure was tied to one.
    #[must_use]
    pub fn sub(&self) -> Option<&str> {
        match self {
            Self::Client(_) => None,
            Self::Transport { sub, .. } | Self::Status { sub, .. } | Self::Decode { sub, .. } => {
                Some(sub)
            }
        }
    }
}
