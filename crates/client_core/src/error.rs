use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to persist cart to slot '{key}': {source}")]
    Persist {
        key: &'static str,
        source: anyhow::Error,
    },
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },
    #[error("server returned {status} for {endpoint}: {message}")]
    Server {
        endpoint: String,
        status: u16,
        message: String,
    },
}
