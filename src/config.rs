//! Analyzer configuration
//!
//! Settings are passed explicitly into [`crate::Analyzer`]; nothing is looked
//! up relative to the running binary. [`AnalyzerConfig::from_env`] reads the
//! optional overrides below:
//!
//! - `SEO_ANALYZER_STOP_WORDS`: path to a newline-delimited stop-word file
//! - `SEO_ANALYZER_TIMEOUT_SECS`: fetch timeout in seconds (default: transport default)
//! - `SEO_ANALYZER_USER_AGENT`: User-Agent header for fetches (default: none)

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};

/// Env var naming a stop-word file
pub const ENV_STOP_WORDS: &str = "SEO_ANALYZER_STOP_WORDS";
/// Env var holding the fetch timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "SEO_ANALYZER_TIMEOUT_SECS";
/// Env var holding a custom User-Agent
pub const ENV_USER_AGENT: &str = "SEO_ANALYZER_USER_AGENT";

/// Where the stop-word list comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StopWordSource {
    /// The English list compiled into the crate
    #[default]
    Embedded,
    /// A newline-delimited file, one word per line
    File(PathBuf),
    /// An in-memory list
    Inline(Vec<String>),
}

/// Configuration for an [`crate::Analyzer`]
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Stop-word list source
    pub stop_words: StopWordSource,
    /// Optional User-Agent sent with URL fetches
    pub user_agent: Option<String>,
    /// Optional fetch timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl AnalyzerConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `SEO_ANALYZER_TIMEOUT_SECS` is not a positive integer.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = non_empty_var(ENV_STOP_WORDS) {
            debug!("Using stop-word file from {}: {}", ENV_STOP_WORDS, path);
            config.stop_words = StopWordSource::File(PathBuf::from(path));
        }

        if let Some(raw) = non_empty_var(ENV_TIMEOUT_SECS) {
            config.timeout = Some(parse_timeout(&raw)?);
        }

        config.user_agent = non_empty_var(ENV_USER_AGENT);

        Ok(config)
    }

    /// Set the stop-word source
    pub fn with_stop_words(mut self, source: StopWordSource) -> Self {
        self.stop_words = source;
        self
    }

    /// Set the fetch timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent sent with fetches
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Parse a timeout given in whole seconds
pub fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| Error::config(format!("invalid timeout {:?}: {}", raw, e)))?;

    if secs == 0 {
        return Err(Error::config("timeout must be greater than zero"));
    }

    Ok(Duration::from_secs(secs))
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
