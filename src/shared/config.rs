use std::path::{Path, PathBuf};
use std::time::Duration;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::infra::github::DEFAULT_ENDPOINT;
use crate::issue::FetchOptions;
use crate::issue::query::MAX_BATCH_SIZE;

/// Top-level configuration for opinion.
#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// GitHub API settings.
    #[serde(default)]
    pub github: GitHubConfig,

    /// Timeouts and retries for the paginated fetch.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Transcript rendering settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// GitHub API configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GitHubConfig {
    /// GraphQL endpoint (default: "https://api.github.com/graphql").
    #[serde(default = "default_endpoint")]
    #[schemars(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Fetch configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    /// Timeout for a single page request in seconds (default: 30).
    #[serde(default = "default_page_timeout_secs")]
    #[schemars(default = "default_page_timeout_secs")]
    pub page_timeout_secs: u64,

    /// Timeout for the whole paginated fetch in seconds (default: 300).
    /// 0 disables the overall deadline.
    #[serde(default = "default_overall_timeout_secs")]
    #[schemars(default = "default_overall_timeout_secs")]
    pub overall_timeout_secs: u64,

    /// Retries per page after a transient transport failure (default: 2).
    #[serde(default = "default_max_retries")]
    #[schemars(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry in milliseconds, doubled for each
    /// further retry (default: 500).
    #[serde(default = "default_retry_backoff_ms")]
    #[schemars(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_timeout_secs: default_page_timeout_secs(),
            overall_timeout_secs: default_overall_timeout_secs(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl FetchConfig {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn to_options(&self) -> FetchOptions {
        FetchOptions {
            batch_size: MAX_BATCH_SIZE,
            max_retries: self.max_retries,
            retry_backoff: Duration::from_millis(self.retry_backoff_ms),
            deadline: (self.overall_timeout_secs > 0)
                .then(|| Duration::from_secs(self.overall_timeout_secs)),
        }
    }
}

/// Transcript rendering configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Column at which comment bodies are wrapped (default: 69).
    #[serde(default = "default_wrap_width")]
    #[schemars(default = "default_wrap_width")]
    pub wrap_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_page_timeout_secs() -> u64 {
    30
}

fn default_overall_timeout_secs() -> u64 {
    300
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    500
}

fn default_wrap_width() -> usize {
    crate::format::TRANSCRIPT_WIDTH
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Returns the XDG config directory (~/.config or $XDG_CONFIG_HOME).
/// Empty values are treated as unset per XDG Base Directory Specification.
fn config_dir() -> Option<PathBuf> {
    let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
    if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    non_empty("HOME").map(|home| PathBuf::from(home).join(".config"))
}

/// Load configuration from ~/.config/opinion/config.ya?ml.
/// Returns Config::default() if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    let Some(dir) = config_dir() else {
        return Ok(Config::default());
    };
    load_config_from_dir(&dir.join("opinion"))
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "loading config");
                return parse_config(&content, &path);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}

/// Generate JSON Schema for the Config struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Config)
}
