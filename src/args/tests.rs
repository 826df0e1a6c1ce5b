use super::*;
use crate::error::{AppError, AppResult, ValidationError};
use clap::Parser;
use std::time::Duration;

fn parse(args: &[&str]) -> AppResult<LoadArgs> {
    let mut argv = vec!["ccload"];
    argv.extend_from_slice(args);
    LoadArgs::try_parse_from(argv).map_err(AppError::from)
}

#[test]
fn positional_arguments_fill_url_workers_duration() -> AppResult<()> {
    let args = parse(&["http://localhost:8080/", "25", "3"])?;
    if args.url.as_deref() != Some("http://localhost:8080/") {
        return Err(AppError::validation("Unexpected url"));
    }
    if args.workers.get() != 25 || args.duration.get() != 3 {
        return Err(AppError::validation(format!(
            "Unexpected workers/duration: {}/{}",
            args.workers.get(),
            args.duration.get()
        )));
    }
    Ok(())
}

#[test]
fn defaults_apply_when_only_url_given() -> AppResult<()> {
    let args = parse(&["https://example.com"])?;
    if args.workers.get() != DEFAULT_WORKERS {
        return Err(AppError::validation("Expected default worker count"));
    }
    if args.duration.get() != DEFAULT_DURATION_SECS {
        return Err(AppError::validation("Expected default duration"));
    }
    if args.request_timeout != Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS) {
        return Err(AppError::validation("Expected default request timeout"));
    }
    if args.pool_idle_timeout != Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS) {
        return Err(AppError::validation("Expected default idle timeout"));
    }
    if args.report_interval != Duration::from_millis(DEFAULT_REPORT_INTERVAL_MS) {
        return Err(AppError::validation("Expected default report interval"));
    }
    if args.pool_max_idle_per_host != DEFAULT_MAX_IDLE_PER_HOST {
        return Err(AppError::validation("Expected default idle pool"));
    }
    if args.wait_ongoing || args.quiet || args.disable_keepalive {
        return Err(AppError::validation("Flags should default to off"));
    }
    Ok(())
}

#[test]
fn zero_workers_or_duration_are_rejected() -> AppResult<()> {
    if parse(&["http://localhost", "0", "5"]).is_ok() {
        return Err(AppError::validation("Zero workers should be rejected"));
    }
    if parse(&["http://localhost", "5", "0"]).is_ok() {
        return Err(AppError::validation("Zero duration should be rejected"));
    }
    if parse(&["http://localhost", "abc"]).is_ok() {
        return Err(AppError::validation("Non-numeric workers should be rejected"));
    }
    Ok(())
}

#[test]
fn duration_flags_accept_units() -> AppResult<()> {
    let args = parse(&[
        "http://localhost",
        "--timeout",
        "250ms",
        "--pool-idle-timeout",
        "2m",
        "--report-interval",
        "500ms",
        "--connect-timeout",
        "1",
    ])?;
    if args.request_timeout != Duration::from_millis(250) {
        return Err(AppError::validation("Unexpected timeout"));
    }
    if args.pool_idle_timeout != Duration::from_secs(120) {
        return Err(AppError::validation("Unexpected idle timeout"));
    }
    if args.report_interval != Duration::from_millis(500) {
        return Err(AppError::validation("Unexpected report interval"));
    }
    if args.connect_timeout != Some(Duration::from_secs(1)) {
        return Err(AppError::validation("Unexpected connect timeout"));
    }
    Ok(())
}

#[test]
fn parse_duration_arg_rejects_bad_input() -> AppResult<()> {
    match parse_duration_arg("") {
        Err(ValidationError::DurationEmpty) => {}
        other => {
            return Err(AppError::validation(format!(
                "Expected empty error, got {:?}",
                other
            )));
        }
    }
    match parse_duration_arg("5d") {
        Err(ValidationError::InvalidDurationUnit { unit }) if unit == "d" => {}
        other => {
            return Err(AppError::validation(format!(
                "Expected unit error, got {:?}",
                other
            )));
        }
    }
    match parse_duration_arg("0ms") {
        Err(ValidationError::DurationZero) => {}
        other => {
            return Err(AppError::validation(format!(
                "Expected zero error, got {:?}",
                other
            )));
        }
    }
    match parse_duration_arg("ms") {
        Err(ValidationError::InvalidDurationFormat { .. }) => {}
        other => {
            return Err(AppError::validation(format!(
                "Expected format error, got {:?}",
                other
            )));
        }
    }
    if parse_duration_arg("18446744073709551615h").is_ok() {
        return Err(AppError::validation("Expected overflow error"));
    }
    Ok(())
}

#[test]
fn positive_numbers_parse_and_reject_zero() -> AppResult<()> {
    let value: PositiveU64 = " 42 ".parse()?;
    if value.get() != 42 {
        return Err(AppError::validation("Expected 42"));
    }
    match "0".parse::<PositiveUsize>() {
        Err(ValidationError::ValueTooSmall { min: 1 }) => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected ValueTooSmall, got {:?}",
            other
        ))),
    }
}

#[test]
fn bool_env_values_follow_common_spellings() -> AppResult<()> {
    for truthy in ["1", "true", "YES", " on "] {
        if !parsers::parse_bool_env(truthy)? {
            return Err(AppError::validation(format!("'{}' should be true", truthy)));
        }
    }
    for falsy in ["", "0", "false", "Off"] {
        if parsers::parse_bool_env(falsy)? {
            return Err(AppError::validation(format!("'{}' should be false", falsy)));
        }
    }
    match parsers::parse_bool_env("maybe") {
        Err(AppError::Validation(ValidationError::InvalidBoolean { value }))
            if value == "maybe" =>
        {
            Ok(())
        }
        other => Err(AppError::validation(format!(
            "Expected invalid boolean, got {:?}",
            other
        ))),
    }
}
