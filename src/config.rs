//! Configuration file handling.
//!
//! castedit works without any configuration. A TOML file can change the
//! defaults used when `--delay` or `--factor` are not given:
//!
//! ```toml
//! [edit]
//! max_delay = 0.5
//! speed_factor = 3.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::edit::{DEFAULT_MAX_DELAY, DEFAULT_SPEED_FACTOR};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CASTEDIT_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub edit: EditConfig,
}

/// Defaults for edit parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Largest gap between events kept by `quantize`, in seconds
    pub max_delay: f64,
    /// Factor used by `speed`
    pub speed_factor: f64,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            max_delay: DEFAULT_MAX_DELAY,
            speed_factor: DEFAULT_SPEED_FACTOR,
        }
    }
}

impl Config {
    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(self.edit.max_delay >= 0.0) {
            bail!("edit.max_delay must be zero or greater (got {})", self.edit.max_delay);
        }
        if !(self.edit.speed_factor.is_finite() && self.edit.speed_factor > 0.0) {
            bail!("edit.speed_factor must be positive (got {})", self.edit.speed_factor);
        }
        Ok(())
    }

    /// Resolve the config file location:
    /// 1. `CASTEDIT_CONFIG` environment variable
    /// 2. `<config dir>/castedit/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("castedit").join("config.toml"))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
