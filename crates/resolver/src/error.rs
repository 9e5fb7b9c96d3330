use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolverError>;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Lookup {url} answered with status {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Malformed country payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Lookup task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
