pub const DEFAULT_WORKERS: usize = 50_000;
pub const DEFAULT_DURATION_SECS: u64 = 60;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_IDLE_PER_HOST: usize = 10_000;
pub const DEFAULT_MAX_IDLE_TOTAL: usize = 100_000;
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 90;
pub const DEFAULT_REPORT_INTERVAL_MS: u64 = 1_000;

/// Config filenames picked up from the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["ccload.toml", "ccload.json"];
