//! Runtime configuration.
//!
//! Settings come from the process environment; there is no config file and
//! no flag of our own, since every argument belongs to age.

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::core::cache::Disk;
use crate::core::constants;

/// Where the cache lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLocation {
    /// `<user cache dir>/age-github`.
    UserDefault,
    /// Explicit directory.
    Dir(PathBuf),
    /// Caching turned off.
    Disabled,
}

/// Settings for a single invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tool name or path to exec.
    pub tool: String,
    /// Base URL of the key listing endpoint, without trailing slash.
    pub keys_url: String,
    pub cache: CacheLocation,
    /// Deadline for resolving one handle.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: constants::TOOL.to_string(),
            keys_url: constants::KEYS_URL.to_string(),
            cache: CacheLocation::UserDefault,
            timeout: constants::FETCH_TIMEOUT,
        }
    }
}

impl Config {
    /// Build the configuration from `AGE_GITHUB_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration using `lookup` to read variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(tool) = lookup(constants::ENV_TOOL).filter(|t| !t.is_empty()) {
            config.tool = tool;
        }

        if let Some(url) = lookup(constants::ENV_KEYS_URL).filter(|u| !u.is_empty()) {
            config.keys_url = url.trim_end_matches('/').to_string();
        }

        if let Some(dir) = lookup(constants::ENV_CACHE_DIR) {
            config.cache = if dir.is_empty() {
                CacheLocation::Disabled
            } else {
                CacheLocation::Dir(PathBuf::from(dir))
            };
        }

        debug!(?config, "loaded configuration");
        config
    }

    /// Open the configured cache.
    pub fn disk_cache(&self) -> Disk {
        match &self.cache {
            CacheLocation::UserDefault => Disk::user_default(),
            CacheLocation::Dir(dir) => Disk::new(dir),
            CacheLocation::Disabled => Disk::disabled(),
        }
    }
}
