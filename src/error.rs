use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date format: {0}. Please use YYYY-MM-DD format.")]
    InvalidDate(String),
    #[error("Invalid timestamp in commit data: {0}")]
    InvalidTimestamp(String),
    #[error("Chart error: {0}")]
    Plot(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
