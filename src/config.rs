//! Run configuration.
//!
//! The original scripts kept every parameter as a module-level constant read
//! at import time. Here the same parameters form one explicit immutable
//! configuration object constructed at process start and passed into the
//! queue and the action builders. There is no config-file loading; callers
//! construct the struct in code or from CLI flags.

use crate::error::QueueError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Content API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Text-generation endpoint; the URL-encoded prompt is appended to it.
    #[serde(default = "default_content_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_content_timeout_secs")]
    pub timeout_secs: u64,

    /// Fixed delay between retries for blocking content paths
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    /// Retry cap for blocking content paths. `None` retries until the
    /// endpoint answers, matching the original scripts.
    #[serde(default)]
    pub max_attempts: Option<u32>,
}

fn default_content_endpoint() -> String {
    "https://text.pollinations.ai/text/".to_string()
}

fn default_content_timeout_secs() -> u64 {
    25
}

fn default_retry_delay_secs() -> u64 {
    5
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            endpoint: default_content_endpoint(),
            timeout_secs: default_content_timeout_secs(),
            retry_delay_secs: default_retry_delay_secs(),
            max_attempts: None,
        }
    }
}

/// Top-level configuration for one queue run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmConfig {
    /// Directory holding one credential file per account
    pub accounts_dir: PathBuf,

    /// Worker pool size (the script variants used 2-6 threads)
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Delay between passes over the directory, in seconds
    #[serde(default = "default_pass_delay_secs")]
    pub pass_delay_secs: u64,

    /// Ledger API nodes, tried in order by the client
    #[serde(default = "default_nodes")]
    pub nodes: Vec<String>,

    /// Content API settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_workers() -> usize {
    3
}

fn default_pass_delay_secs() -> u64 {
    2
}

fn default_nodes() -> Vec<String> {
    vec![
        "https://api.deathwing.me".to_string(),
        "https://anyx.io".to_string(),
        "https://api.openhive.network".to_string(),
        "https://hived.emre.sh".to_string(),
    ]
}

impl SwarmConfig {
    /// Configuration with defaults for everything except the account directory.
    pub fn for_dir(accounts_dir: impl Into<PathBuf>) -> Self {
        Self {
            accounts_dir: accounts_dir.into(),
            workers: default_workers(),
            pass_delay_secs: default_pass_delay_secs(),
            nodes: default_nodes(),
            content: ContentConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate invariants that the queue relies on.
    pub fn validate(&self) -> Result<(), QueueError> {
        if self.workers == 0 {
            return Err(QueueError::Config("workers must be at least 1".to_string()));
        }
        if self.nodes.is_empty() {
            return Err(QueueError::Config(
                "at least one ledger node is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn pass_delay(&self) -> Duration {
        Duration::from_secs(self.pass_delay_secs)
    }
}
