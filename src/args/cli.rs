use clap::Parser;
use std::time::Duration;

use super::defaults::DEFAULT_MAX_IDLE_PER_HOST;
use super::parsers::{
    parse_bool_env, parse_duration_cli, parse_positive_u64, parse_positive_usize,
};
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "ccload",
    version,
    about = "Unthrottled HTTP GET load generator: a fixed worker pool hammers one URL for a fixed time and reports live RPS."
)]
pub struct LoadArgs {
    /// Target URL (http or https)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Number of concurrent workers
    #[arg(
        value_name = "WORKERS",
        default_value = "50000",
        value_parser = parse_positive_usize
    )]
    pub workers: PositiveUsize,

    /// Run duration in seconds
    #[arg(
        value_name = "DURATION",
        default_value = "60",
        value_parser = parse_positive_u64
    )]
    pub duration: PositiveU64,

    /// Path to a TOML or JSON config file
    #[arg(long = "config", short = 'c', env = "CCLOAD_CONFIG")]
    pub config: Option<String>,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = "5s",
        value_parser = parse_duration_cli
    )]
    pub request_timeout: Duration,

    /// TCP connect timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", value_parser = parse_duration_cli)]
    pub connect_timeout: Option<Duration>,

    /// Maximum idle connections kept per host
    #[arg(
        long = "pool-max-idle-per-host",
        default_value_t = DEFAULT_MAX_IDLE_PER_HOST
    )]
    pub pool_max_idle_per_host: usize,

    /// How long an idle pooled connection is kept (supports ms/s/m/h)
    #[arg(
        long = "pool-idle-timeout",
        default_value = "90s",
        value_parser = parse_duration_cli
    )]
    pub pool_idle_timeout: Duration,

    /// Open a fresh connection for every request
    #[arg(long = "disable-keepalive")]
    pub disable_keepalive: bool,

    /// Interval between live status lines (supports ms/s/m/h)
    #[arg(
        long = "report-interval",
        default_value = "1s",
        value_parser = parse_duration_cli
    )]
    pub report_interval: Duration,

    /// Wait for in-flight requests to finish before taking the final snapshot
    #[arg(long = "wait-ongoing")]
    pub wait_ongoing: bool,

    /// Suppress the live status line
    #[arg(long = "quiet", short = 'q')]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,
}
