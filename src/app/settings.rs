use std::time::Duration;

use reqwest::Url;

use crate::args::{DEFAULT_MAX_IDLE_TOTAL, DEFAULT_REPORT_INTERVAL_MS, LoadArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{ClientSettings, UserAgentPool};

/// Validated, immutable description of one run.
#[derive(Debug, Clone)]
pub struct LoadTestConfig {
    url: Url,
    workers: PositiveUsize,
    duration: Duration,
    client: ClientSettings,
    report_interval: Duration,
    wait_ongoing: bool,
    user_agents: UserAgentPool,
}

impl LoadTestConfig {
    /// Builds a config with default client settings and the built-in
    /// User-Agent rotation.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is empty, malformed, not http(s), or has
    /// no host, or when `workers` or `duration_secs` is zero.
    pub fn new(url: &str, workers: usize, duration_secs: u64) -> AppResult<Self> {
        let url = parse_target_url(url)?;
        let workers =
            PositiveUsize::try_from(workers).map_err(|_too_small| ValidationError::WorkersZero)?;
        if duration_secs == 0 {
            return Err(AppError::validation(ValidationError::DurationZero));
        }
        Ok(Self {
            url,
            workers,
            duration: Duration::from_secs(duration_secs),
            client: ClientSettings::default(),
            report_interval: Duration::from_millis(DEFAULT_REPORT_INTERVAL_MS),
            wait_ongoing: false,
            user_agents: UserAgentPool::builtin(),
        })
    }

    /// Builds a config from parsed (and config-file merged) CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is missing or invalid.
    pub fn from_args(args: &LoadArgs, user_agents: Option<UserAgentPool>) -> AppResult<Self> {
        let url = args
            .url
            .as_deref()
            .ok_or(ValidationError::MissingUrl)?;
        let client = ClientSettings {
            request_timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
            pool_max_idle_per_host: args.pool_max_idle_per_host,
            pool_max_idle_total: DEFAULT_MAX_IDLE_TOTAL,
            pool_idle_timeout: args.pool_idle_timeout,
            keep_alive: !args.disable_keepalive,
        };
        let config = Self::new(url, args.workers.get(), args.duration.get())?
            .with_client(client)
            .with_report_interval(args.report_interval)?
            .with_wait_ongoing(args.wait_ongoing);
        Ok(match user_agents {
            Some(pool) => config.with_user_agents(pool),
            None => config,
        })
    }

    #[must_use]
    pub fn with_client(mut self, client: ClientSettings) -> Self {
        self.client = client;
        self
    }

    /// # Errors
    ///
    /// Returns an error when the interval is zero.
    pub fn with_report_interval(mut self, interval: Duration) -> Result<Self, ValidationError> {
        if interval.is_zero() {
            return Err(ValidationError::DurationZero);
        }
        self.report_interval = interval;
        Ok(self)
    }

    #[must_use]
    pub const fn with_wait_ongoing(mut self, wait_ongoing: bool) -> Self {
        self.wait_ongoing = wait_ongoing;
        self
    }

    #[must_use]
    pub fn with_user_agents(mut self, user_agents: UserAgentPool) -> Self {
        self.user_agents = user_agents;
        self
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers.get()
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub const fn client(&self) -> &ClientSettings {
        &self.client
    }

    #[must_use]
    pub const fn report_interval(&self) -> Duration {
        self.report_interval
    }

    #[must_use]
    pub const fn wait_ongoing(&self) -> bool {
        self.wait_ongoing
    }

    #[must_use]
    pub const fn user_agents(&self) -> &UserAgentPool {
        &self.user_agents
    }
}

fn parse_target_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingUrl);
    }
    let url = Url::parse(trimmed).map_err(|err| ValidationError::InvalidUrl {
        url: trimmed.to_owned(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ValidationError::UnsupportedScheme {
                scheme: other.to_owned(),
            });
        }
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::UrlMissingHost {
            url: trimmed.to_owned(),
        });
    }
    Ok(url)
}
