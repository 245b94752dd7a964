//! Server configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::DEFAULT_UPLOADS_DIR;

/// Env var pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "UPLOAD_METRICS_CONFIG";

/// Env var overriding `uploads_dir`
pub const UPLOADS_DIR_ENV: &str = "UPLOADS_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory measured when a tool call names no path
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,
    /// Upper bound on a single blocking collection
    #[serde(default = "default_blocking_timeout_secs")]
    pub blocking_timeout_secs: u64,
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from(DEFAULT_UPLOADS_DIR)
}

fn default_blocking_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uploads_dir: default_uploads_dir(),
            blocking_timeout_secs: default_blocking_timeout_secs(),
        }
    }
}

impl Config {
    /// Load config from standard locations, then apply env overrides.
    ///
    /// Searched in order:
    /// 1. `UPLOAD_METRICS_CONFIG` env var
    /// 2. `./upload-metrics.toml`
    /// 3. `$XDG_CONFIG_HOME/upload-metrics/config.toml`
    /// 4. Defaults
    pub fn load() -> Self {
        let env_path = std::env::var(CONFIG_PATH_ENV).ok();
        let uploads_override = std::env::var(UPLOADS_DIR_ENV).ok();

        Self::resolve(
            env_path.as_deref(),
            &Self::standard_paths(),
            uploads_override.as_deref(),
        )
    }

    /// File locations searched after the env var, in order
    fn standard_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("upload-metrics.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("upload-metrics").join("config.toml"));
        }
        paths
    }

    fn resolve(env_path: Option<&str>, standard: &[PathBuf], uploads_override: Option<&str>) -> Self {
        let mut candidates = Vec::new();

        match env_path {
            Some(path) if Path::new(path).exists() => candidates.push(PathBuf::from(path)),
            Some(path) => tracing::warn!("{}={} does not exist", CONFIG_PATH_ENV, path),
            None => {}
        }
        candidates.extend_from_slice(standard);

        let mut config = Self::first_loadable(&candidates).unwrap_or_else(|| {
            tracing::info!("Using default configuration");
            Config::default()
        });

        if let Some(dir) = uploads_override.filter(|dir| !dir.is_empty()) {
            tracing::info!("Using {}={}", UPLOADS_DIR_ENV, dir);
            config.uploads_dir = PathBuf::from(dir);
        }

        config
    }

    fn first_loadable(candidates: &[PathBuf]) -> Option<Self> {
        candidates
            .iter()
            .filter(|path| path.exists())
            .find_map(|path| match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!("Failed to load config {}: {:#}", path.display(), e);
                    None
                }
            })
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn blocking_timeout(&self) -> Duration {
        Duration::from_secs(self.blocking_timeout_secs)
    }
}
