use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project page advertised in the outgoing user agent
pub const PROJECT_URL: &str = "https://github.com/bjornmorten/ghkeys";

/// ghkeys configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GhKeysConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Key fetching configuration
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Settings for the requests sent to GitHub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Server hosting the `{user}.keys` endpoints
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Append target used when `--append` is given without `--output`.
    /// Falls back to `~/.ssh/authorized_keys`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_keys: Option<PathBuf>,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_base_url() -> String {
    "https://github.com".to_string()
}

fn default_user_agent() -> String {
    format!("ghkeys/{} (+{})", env!("CARGO_PKG_VERSION"), PROJECT_URL)
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}
