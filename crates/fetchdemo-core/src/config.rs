use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default redirect limit, matching what browsers and libcurl commonly allow.
pub const DEFAULT_MAX_REDIRECTIONS: u32 = 10;

/// Global configuration loaded from `~/.config/fetchdemo/config.toml`.
///
/// The identifier list is fixed and intentionally absent from this file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchDemoConfig {
    /// `User-Agent` sent by both fetch modes (None = send none).
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Connect timeout in seconds (None = transport default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout in seconds (None = transport default).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Maximum number of redirects to follow per fetch.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
    /// Optional cap on in-flight fetches for the parallel strategy (None = launch all at once).
    #[serde(default)]
    pub max_parallel: Option<usize>,
}

fn default_max_redirections() -> u32 {
    DEFAULT_MAX_REDIRECTIONS
}

impl Default for FetchDemoConfig {
    fn default() -> Self {
        Self {
            user_agent: Some(default_user_agent()),
            connect_timeout_secs: None,
            request_timeout_secs: None,
            max_redirections: DEFAULT_MAX_REDIRECTIONS,
            max_parallel: None,
        }
    }
}

pub fn default_user_agent() -> String {
    format!("fetchdemo/{}", env!("CARGO_PKG_VERSION"))
}

/// Transport settings shared by the blocking and suspending fetch modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOptions {
    pub user_agent: Option<String>,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub max_redirections: u32,
}

impl Default for TransportOptions {
    fn default() -> Self {
        FetchDemoConfig::default().transport()
    }
}

impl FetchDemoConfig {
    /// Transport settings for `HttpFetcher`.
    pub fn transport(&self) -> TransportOptions {
        TransportOptions {
            user_agent: self.user_agent.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_redirections: self.max_redirections,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fetchdemo")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchDemoConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<FetchDemoConfig> {
    if !path.exists() {
        let default_cfg = FetchDemoConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FetchDemoConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
