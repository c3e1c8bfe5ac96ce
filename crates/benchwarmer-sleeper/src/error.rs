// Error types for the Sleeper source.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SleeperError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("roster {roster_id} is missing `{field}`")]
    MissingField { roster_id: u32, field: &'static str },

    #[error("roster {roster_id} has a malformed `{field}`: {value}")]
    MalformedNumber {
        roster_id: u32,
        field: &'static str,
        value: String,
    },
}
