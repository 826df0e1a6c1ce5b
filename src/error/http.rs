use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid User-Agent '{value}': {source}")]
    InvalidUserAgent {
        value: String,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    #[error("Request failed: {source}")]
    RequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request attempt panicked.")]
    AttemptPanicked,
}
