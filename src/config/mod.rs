use std::time::Duration;

use crate::errors::{TechfeedError, TechfeedResult};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SCRAPE_DELAY_MS: u64 = 200;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_timeout: Duration,
    pub user_agent: String,
    pub scrape_delay: Duration,
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
            scrape_delay: Duration::from_millis(DEFAULT_SCRAPE_DELAY_MS),
            log_filter: None,
        }
    }
}

fn default_user_agent() -> String {
    format!("techfeed/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> TechfeedResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> TechfeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = parse_u64(&lookup, "TECHFEED_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(TechfeedError::Config(
                "TECHFEED_HTTP_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        let delay_ms = parse_u64(&lookup, "TECHFEED_SCRAPE_DELAY_MS", DEFAULT_SCRAPE_DELAY_MS)?;

        let user_agent = lookup("TECHFEED_USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(default_user_agent);

        let log_filter = lookup("TECHFEED_LOG").filter(|f| !f.trim().is_empty());

        Ok(Self {
            http_timeout: Duration::from_secs(timeout_secs),
            user_agent,
            scrape_delay: Duration::from_millis(delay_ms),
            log_filter,
        })
    }
}

fn parse_u64<F>(lookup: &F, key: &str, default: u64) -> TechfeedResult<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| TechfeedError::Config(format!("{} must be a number, got '{}'", key, raw))),
    }
}
