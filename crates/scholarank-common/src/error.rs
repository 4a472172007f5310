use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScholarankError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{source_name} rate limit hit (HTTP 429). {hint}")]
    RateLimited {
        source_name: &'static str,
        hint: &'static str,
    },

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: StatusCode, url: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid corpus: {0}")]
    InvalidCorpus(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Security error: {0}")]
    SecurityError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScholarankError {
    /// True for the one failure the search command degrades on.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ScholarankError::RateLimited { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScholarankError>;
