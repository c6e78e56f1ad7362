use anyhow::{Context, Result, bail};
use replview_present::Depth;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::args::ColorChoice;

pub const CONFIG_ENV: &str = "REPLVIEW_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (`--config`)
/// 2. REPLVIEW_CONFIG environment variable
/// 3. `<user config dir>/replview/config.toml`
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|dir| dir.join("replview").join("config.toml"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Expansion depth for top-level values
    pub max_depth: usize,
    /// Ignore `max_depth` and expand everything
    pub unbounded: bool,
    pub color: ColorChoice,
    /// Class name given to JSON objects without an `@class` key
    pub default_class: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 4,
            unbounded: false,
            color: ColorChoice::Auto,
            default_class: "stdClass".to_string(),
        }
    }
}

impl Config {
    /// Load the config for this invocation. An explicitly requested file
    /// must exist; the implicit locations fall back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path
            && !path.exists()
        {
            bail!("config file not found: {}", path.display());
        }

        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn depth(&self) -> Depth {
        if self.unbounded {
            Depth::Unbounded
        } else {
            Depth::Limited(self.max_depth)
        }
    }
}
