use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::app::LoadTestConfig;
use crate::args::{LoadArgs, PositiveU64, PositiveUsize, parse_duration_arg};
use crate::config::apply_config;
use crate::config::types::{ConfigFile, DurationValue};
use crate::error::AppResult;

thread_local! {
    static BASE_MATCHES: ArgMatches = LoadArgs::command().get_matches_from(["ccload"]);
}

/// Parses a duration argument (e.g. `10s`, `500ms`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_arg_input(input: &str) -> AppResult<Duration> {
    Ok(parse_duration_arg(input)?)
}

/// Parses a duration value the way config strings are read.
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_value_input(input: &str) -> AppResult<Duration> {
    Ok(DurationValue::Text(input.to_owned()).to_duration()?)
}

/// Parses TOML config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<()> {
    let config: ConfigFile = toml::from_str(input)?;
    apply_config_to_defaults(&config)
}

/// Parses JSON config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_json(input: &[u8]) -> AppResult<()> {
    let config: ConfigFile = serde_json::from_slice(input)?;
    apply_config_to_defaults(&config)
}

/// Parses a positive u64 string value.
///
/// # Errors
///
/// Returns an error when the value is invalid or zero.
pub fn parse_positive_u64_input(input: &str) -> AppResult<u64> {
    let value: PositiveU64 = input.parse()?;
    Ok(value.get())
}

/// Parses a positive usize string value.
///
/// # Errors
///
/// Returns an error when the value is invalid or zero.
pub fn parse_positive_usize_input(input: &str) -> AppResult<usize> {
    let value: PositiveUsize = input.parse()?;
    Ok(value.get())
}

/// Validates a target URL with the run's URL rules.
///
/// # Errors
///
/// Returns an error when the URL would be rejected at startup.
pub fn validate_target_url_input(input: &str) -> AppResult<()> {
    LoadTestConfig::new(input, 1, 1)?;
    Ok(())
}

fn apply_config_to_defaults(config: &ConfigFile) -> AppResult<()> {
    BASE_MATCHES.with(|matches| {
        let mut args = LoadArgs::from_arg_matches(matches)?;
        let user_agents = apply_config(&mut args, matches, config)?;
        if args.url.is_some() {
            LoadTestConfig::from_args(&args, user_agents)?;
        }
        Ok(())
    })
}
