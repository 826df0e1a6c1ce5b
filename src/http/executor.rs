use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::{HeaderValue, USER_AGENT};
use reqwest::{Client, Response, Url};

use crate::error::{AppResult, HttpError};

use super::client::{ClientSettings, build_client};

/// What a completed request looked like once its body was drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseOutcome {
    pub status: u16,
    pub response_bytes: u64,
    /// `false` when the body stream broke off before the end.
    pub body_complete: bool,
}

/// Issues one GET and hands back its outcome.
///
/// Implementations must consume the whole response body before returning so
/// the underlying connection can be reused.
#[async_trait]
pub trait RequestExecutor: Send + Sync + 'static {
    async fn execute(&self, url: &Url, user_agent: &str) -> Result<ResponseOutcome, HttpError>;
}

/// reqwest-backed executor holding the run's single pooled client.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// # Errors
    ///
    /// Returns an error when the client cannot be built.
    pub fn new(settings: &ClientSettings) -> AppResult<Self> {
        Ok(Self {
            client: build_client(settings)?,
        })
    }

    async fn send(&self, url: &Url, user_agent: &str) -> Result<Response, HttpError> {
        let user_agent =
            HeaderValue::from_str(user_agent).map_err(|err| HttpError::InvalidUserAgent {
                value: user_agent.to_owned(),
                source: err,
            })?;
        self.client
            .get(url.clone())
            .header(USER_AGENT, user_agent)
            .send()
            .await
            .map_err(|err| HttpError::RequestFailed { source: err })
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, url: &Url, user_agent: &str) -> Result<ResponseOutcome, HttpError> {
        let response = self.send(url, user_agent).await?;
        let status = response.status().as_u16();
        let (response_bytes, body_complete) = match drain_response_body(response).await {
            Ok(bytes) => (bytes, true),
            Err(_partial) => (0, false),
        };
        Ok(ResponseOutcome {
            status,
            response_bytes,
            body_complete,
        })
    }
}

/// Reads the body to the end and drops it, returning the byte count.
async fn drain_response_body(response: Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
