use std::time::Duration;

use serde::Deserialize;

use crate::error::{LeagueError, Result};

pub const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Settings for talking to the Fantasy Premier League API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// API root. A trailing slash is ignored when URLs are built.
    pub base_url: String,
    /// Follow `has_next` through every standings page instead of reading page 1 only.
    pub paginate: bool,
    /// Upper bound on in-flight per-team requests.
    pub max_concurrent_requests: usize,
    pub timeout_secs: u64,
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            paginate: true,
            max_concurrent_requests: 8,
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl FetchConfig {
    /// Start from the defaults and apply any `FPL_*` environment overrides.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("FPL_BASE_URL") {
            config.base_url = url;
        }
        if let Some(value) = lookup("FPL_PAGINATE") {
            config.paginate = parse_bool("FPL_PAGINATE", &value)?;
        }
        if let Some(value) = lookup("FPL_MAX_CONCURRENT_REQUESTS") {
            config.max_concurrent_requests = value
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(LeagueError::Config {
                    key: "FPL_MAX_CONCURRENT_REQUESTS",
                    value,
                })?;
        }
        if let Some(value) = lookup("FPL_TIMEOUT_SECS") {
            config.timeout_secs = value.parse().map_err(|_| LeagueError::Config {
                key: "FPL_TIMEOUT_SECS",
                value,
            })?;
        }
        if let Some(agent) = lookup("FPL_USER_AGENT") {
            config.user_agent = Some(agent);
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a [`reqwest::Client`] honouring the timeout and user agent.
    pub fn build_http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout());
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        builder.build().map_err(|e| LeagueError::Http {
            url: self.base_url.clone(),
            source: e,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LeagueError::Config {
            key,
            value: value.to_owned(),
        }),
    }
}
