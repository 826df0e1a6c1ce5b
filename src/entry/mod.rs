use std::ffi::OsString;
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::app::summary::print_summary;
use crate::app::{LoadTestConfig, LoadTestController, NullSink, RunOutcome, TerminalSink};
use crate::args::{DEFAULT_CONFIG_FILES, LoadArgs};
use crate::config::{apply_config, load_config};
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::UserAgentPool;
use crate::system::logger::init_logging;
use crate::system::shutdown_handlers::wait_for_interrupt;

/// Binary entry point: parse, merge config, run, print the summary.
///
/// # Errors
///
/// Returns an error for invalid arguments or configuration, or when the
/// runtime or HTTP client cannot be built. A completed run is `Ok` no matter
/// how many requests failed.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    let user_agents = merge_config(&mut args, &matches)?;
    init_logging(args.verbose, args.no_color);

    if args.url.as_deref().is_none_or(|url| url.trim().is_empty()) {
        tracing::error!("Missing URL (pass it as the first argument or set url in config).");
        return Err(AppError::validation(ValidationError::MissingUrl));
    }
    let config = LoadTestConfig::from_args(&args, user_agents)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(config, args.quiet, args.no_color))
}

fn parse_args() -> AppResult<Option<(LoadArgs, ArgMatches)>> {
    let mut cmd = LoadArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = LoadArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn merge_config(args: &mut LoadArgs, matches: &ArgMatches) -> AppResult<Option<UserAgentPool>> {
    match load_config(args.config.as_deref())? {
        Some(config) => apply_config(args, matches, &config),
        None => Ok(None),
    }
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

async fn run_async(config: LoadTestConfig, quiet: bool, no_color: bool) -> AppResult<()> {
    let controller = LoadTestController::new(config)?;
    let summary = if quiet {
        let RunOutcome { summary, .. } = controller
            .run_until(NullSink, wait_for_interrupt())
            .await?;
        summary
    } else {
        let RunOutcome { summary, .. } = controller
            .run_until(TerminalSink::stdout(no_color), wait_for_interrupt())
            .await?;
        summary
    };
    print_summary(&summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_shows_help_without_default_config() -> Result<(), String> {
        if has_default_config() {
            return Ok(());
        }
        let bare = [OsString::from("ccload")];
        if !should_show_help(&bare) {
            return Err("Bare invocation should show help".to_owned());
        }
        let separator = [OsString::from("ccload"), OsString::from("--")];
        if !should_show_help(&separator) {
            return Err("Lone separator should show help".to_owned());
        }
        let with_url = [OsString::from("ccload"), OsString::from("http://localhost")];
        if should_show_help(&with_url) {
            return Err("URL argument should not show help".to_owned());
        }
        Ok(())
    }
}
