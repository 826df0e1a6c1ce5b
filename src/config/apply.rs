use std::time::Duration;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{LoadArgs, PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};
use crate::http::UserAgentPool;

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments.
///
/// Values given on the command line win; config values replace built-in
/// defaults. A configured `user_agents` list is returned separately since it
/// has no CLI counterpart.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut LoadArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<Option<UserAgentPool>> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "workers")
        && let Some(workers) = config.workers
    {
        args.workers = ensure_positive_usize(workers, "workers")?;
    }

    if !is_cli(matches, "duration")
        && let Some(duration) = config.duration
    {
        args.duration = ensure_positive_u64(duration, "duration")?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = to_duration(timeout, "timeout")?;
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = Some(to_duration(timeout, "connect_timeout")?);
    }

    if !is_cli(matches, "pool_max_idle_per_host")
        && let Some(max_idle) = config.pool_max_idle_per_host
    {
        args.pool_max_idle_per_host = max_idle;
    }

    if !is_cli(matches, "pool_idle_timeout")
        && let Some(idle) = config.pool_idle_timeout.as_ref()
    {
        args.pool_idle_timeout = to_duration(idle, "pool_idle_timeout")?;
    }

    if !is_cli(matches, "disable_keepalive")
        && let Some(disable) = config.disable_keepalive
    {
        args.disable_keepalive = disable;
    }

    if !is_cli(matches, "report_interval")
        && let Some(interval) = config.report_interval.as_ref()
    {
        args.report_interval = to_duration(interval, "report_interval")?;
    }

    if !is_cli(matches, "wait_ongoing")
        && let Some(wait) = config.wait_ongoing
    {
        args.wait_ongoing = wait;
    }

    if !is_cli(matches, "quiet")
        && let Some(quiet) = config.quiet
    {
        args.quiet = quiet;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    config
        .user_agents
        .clone()
        .map(|agents| {
            UserAgentPool::from_list(agents)
                .map_err(|err| AppError::config(ConfigError::InvalidUserAgents { source: err }))
        })
        .transpose()
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn to_duration(value: &DurationValue, field: &str) -> AppResult<Duration> {
    value.to_duration().map_err(|err| {
        AppError::config(ConfigError::InvalidDuration {
            field: field.to_owned(),
            source: err,
        })
    })
}
