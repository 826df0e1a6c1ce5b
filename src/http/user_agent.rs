use std::sync::Arc;

use rand::seq::SliceRandom;
use reqwest::header::HeaderValue;

use crate::error::ValidationError;

const BUILTIN_USER_AGENTS: [&str; 10] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.1 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36 OPR/95.0.0.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36 EdgA/109.0.1518.78",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 16_3 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/109.0.5414.85 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/109.0",
];

/// Immutable rotation of User-Agent strings, picked uniformly at random.
#[derive(Debug, Clone)]
pub struct UserAgentPool {
    agents: Arc<[String]>,
}

impl UserAgentPool {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            agents: BUILTIN_USER_AGENTS
                .iter()
                .map(|agent| (*agent).to_owned())
                .collect(),
        }
    }

    /// # Errors
    ///
    /// Returns an error when the list is empty, or an entry is blank or not a
    /// valid header value.
    pub fn from_list(agents: Vec<String>) -> Result<Self, ValidationError> {
        if agents.is_empty() {
            return Err(ValidationError::UserAgentListEmpty);
        }
        if agents.iter().any(|agent| agent.trim().is_empty()) {
            return Err(ValidationError::UserAgentBlank);
        }
        for agent in &agents {
            HeaderValue::from_str(agent).map_err(|err| ValidationError::UserAgentInvalid {
                value: agent.clone(),
                source: err,
            })?;
        }
        Ok(Self {
            agents: agents.into(),
        })
    }

    #[must_use]
    pub fn pick(&self) -> &str {
        self.agents
            .choose(&mut rand::thread_rng())
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[must_use]
    pub fn contains(&self, agent: &str) -> bool {
        self.agents.iter().any(|candidate| candidate == agent)
    }
}

impl Default for UserAgentPool {
    fn default() -> Self {
        Self::builtin()
    }
}
