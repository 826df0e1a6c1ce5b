//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::LoadArgs;
pub use defaults::{
    DEFAULT_DURATION_SECS, DEFAULT_IDLE_TIMEOUT_SECS, DEFAULT_MAX_IDLE_PER_HOST,
    DEFAULT_MAX_IDLE_TOTAL, DEFAULT_REPORT_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_WORKERS,
};
pub use parsers::parse_duration_arg;
pub use types::{PositiveU64, PositiveUsize};

pub(crate) use defaults::DEFAULT_CONFIG_FILES;
