use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error};

use crate::args::{
    DEFAULT_IDLE_TIMEOUT_SECS, DEFAULT_MAX_IDLE_PER_HOST, DEFAULT_MAX_IDLE_TOTAL,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::error::{AppError, AppResult, HttpError};

/// Connection-pool and timeout settings for the shared client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub request_timeout: Duration,
    pub connect_timeout: Option<Duration>,
    pub pool_max_idle_per_host: usize,
    /// Upper bound on idle connections across all hosts. reqwest only caps
    /// per host, so with a single target this is informational.
    pub pool_max_idle_total: usize,
    pub pool_idle_timeout: Duration,
    pub keep_alive: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: None,
            pool_max_idle_per_host: DEFAULT_MAX_IDLE_PER_HOST,
            pool_max_idle_total: DEFAULT_MAX_IDLE_TOTAL,
            pool_idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            keep_alive: true,
        }
    }
}

impl ClientSettings {
    /// Idle connections reqwest may keep for the target host.
    #[must_use]
    pub const fn effective_idle_per_host(&self) -> usize {
        if !self.keep_alive {
            return 0;
        }
        if self.pool_max_idle_per_host < self.pool_max_idle_total {
            self.pool_max_idle_per_host
        } else {
            self.pool_max_idle_total
        }
    }
}

/// Builds the one client every worker shares.
///
/// # Errors
///
/// Returns an error when reqwest cannot construct the client (e.g. TLS backend
/// initialisation fails).
pub fn build_client(settings: &ClientSettings) -> AppResult<Client> {
    let mut client_builder = Client::builder()
        .timeout(settings.request_timeout)
        .pool_max_idle_per_host(settings.effective_idle_per_host());

    client_builder = if settings.keep_alive {
        client_builder.pool_idle_timeout(Some(settings.pool_idle_timeout))
    } else {
        client_builder.pool_idle_timeout(Some(Duration::from_secs(0)))
    };

    if let Some(connect_timeout) = settings.connect_timeout {
        client_builder = client_builder.connect_timeout(connect_timeout);
    }

    debug!(
        "HTTP client: timeout={}ms idle_per_host={} idle_timeout={}s keep_alive={}",
        settings.request_timeout.as_millis(),
        settings.effective_idle_per_host(),
        settings.pool_idle_timeout.as_secs(),
        settings.keep_alive
    );

    match client_builder.build() {
        Ok(client) => Ok(client),
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            Err(AppError::http(HttpError::BuildClientFailed { source: e }))
        }
    }
}
