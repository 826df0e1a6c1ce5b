use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration_arg;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(alias = "concurrency")]
    pub workers: Option<usize>,
    pub duration: Option<u64>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub pool_max_idle_per_host: Option<usize>,
    pub pool_idle_timeout: Option<DurationValue>,
    pub disable_keepalive: Option<bool>,
    pub report_interval: Option<DurationValue>,
    pub wait_ongoing: Option<bool>,
    pub quiet: Option<bool>,
    pub no_color: Option<bool>,
    pub user_agents: Option<Vec<String>>,
}

/// Either whole seconds (`timeout = 5`) or a string with a unit (`"250ms"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
